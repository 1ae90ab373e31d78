//! Fixture file loading.

use crate::{parse_fixture, AlignmentFixture, SpecError, SpecResult};
use std::fs;
use std::path::Path;

/// Load a single fixture file.
pub fn load_fixture(path: &Path) -> SpecResult<AlignmentFixture> {
    let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_fixture(&content).map_err(|e| SpecError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load every `*.toml` fixture under `dir`, keyed by relative path and sorted.
///
/// The expected-failures ledger is not a fixture and is skipped.
pub fn load_all_fixtures(dir: &Path) -> SpecResult<Vec<(String, AlignmentFixture)>> {
    let mut fixtures = Vec::new();
    load_fixtures_recursive(dir, dir, &mut fixtures)?;
    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

pub const EXPECTED_FAILURES_FILE: &str = "expected-failures.toml";

fn load_fixtures_recursive(
    base: &Path,
    dir: &Path,
    fixtures: &mut Vec<(String, AlignmentFixture)>,
) -> SpecResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    let read_error = |e: std::io::Error| SpecError::Load {
        path: dir.display().to_string(),
        message: e.to_string(),
    };
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();

        if path.is_dir() {
            load_fixtures_recursive(base, &path, fixtures)?;
        } else if path.extension().map_or(false, |e| e == "toml")
            && path
                .file_name()
                .map_or(true, |n| n != EXPECTED_FAILURES_FILE)
        {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let fixture = load_fixture(&path)?;
            fixtures.push((relative.display().to_string(), fixture));
        }
    }

    Ok(())
}
