//! Expected failures tracking via TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{SpecError, SpecResult};

/// Loaded expected failures ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (won't fix soon).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// A single expected failure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture path relative to the fixtures directory.
    pub fixture: String,
    /// Response id within the fixture.
    pub response: String,
    #[serde(default)]
    pub reason: Option<String>,
    /// Date added (YYYY-MM-DD).
    #[serde(default)]
    pub added: Option<String>,
    /// Related issue URL.
    #[serde(default)]
    pub issue: Option<String>,
}

impl FailureEntry {
    /// Ledger notes joined for display, e.g. `reason; added 2026-10-01`.
    pub fn notes(&self) -> Option<String> {
        let notes: Vec<String> = [
            self.reason.clone(),
            self.added.as_ref().map(|d| format!("added {}", d)),
            self.issue.clone(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if notes.is_empty() {
            None
        } else {
            Some(notes.join("; "))
        }
    }
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    Known,
    Pending,
    /// Expected to pass; the failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Load from a TOML file. A missing file means no expected failures.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let load_error = |message: String| SpecError::Load {
            path: path.display().to_string(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        toml::from_str(&content).map_err(|e| load_error(e.to_string()))
    }

    /// Classify a failing response.
    pub fn classify(&self, fixture: &str, response: &str) -> FailureState {
        let listed = |entries: &[FailureEntry]| {
            entries
                .iter()
                .any(|e| e.fixture == fixture && e.response == response)
        };
        if listed(&self.known) {
            FailureState::Known
        } else if listed(&self.pending) {
            FailureState::Pending
        } else {
            FailureState::Regression
        }
    }

    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    pub fn get_entry(&self, fixture: &str, response: &str) -> Option<&FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .find(|e| e.fixture == fixture && e.response == response)
    }
}

/// Totals over a harness run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessResult {
    pub total: usize,
    pub passed: usize,
    /// Known plus pending.
    pub expected_failures: usize,
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// 0 when nothing regressed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.regressions > 0 {
            1
        } else {
            0
        }
    }

    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => self.expected_failures += 1,
            FailureState::Regression => self.regressions += 1,
        }
    }
}
