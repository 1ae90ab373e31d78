//! Running fixtures through the aligner.

use std::path::Path;

use kbp_align::Aligner;

use crate::failures::{ExpectedFailures, FailureState, HarnessResult};
use crate::formatter::{format_expected_failure, format_failure, format_summary};
use crate::loader::{load_all_fixtures, EXPECTED_FAILURES_FILE};
use crate::matcher::{check_response, CheckResult, MatchResult};
use crate::{AlignmentFixture, Expectation, SpecError, SpecResult};

/// Align every response in `fixture` and check it.
pub fn run_fixture(fixture: &AlignmentFixture) -> SpecResult<MatchResult> {
    let document = fixture.annotated()?;
    let aligner = Aligner::new(fixture.config.clone());
    let doc = aligner.for_document(
        document.inventory(),
        document.head_lookup(),
        fixture.role_map(),
    );

    let mut result = MatchResult::new();
    for expected in &fixture.responses {
        if let Expectation::Mention(id) = expected.expectation() {
            if document.inventory().get(&id).is_none() {
                return Err(SpecError::Assertion {
                    message: format!("response {} expects unknown mention {}", expected.id, id),
                });
            }
        }
        let response = expected.to_response(document.doc_id())?;
        let aligned = doc.align(&response);
        let outcome = check_response(expected, &aligned);
        result.add(CheckResult {
            response: expected.id.clone(),
            cas: expected.cas_span()?,
            result: aligned,
            outcome,
        });
    }
    Ok(result)
}

/// Outcome of running a fixtures directory.
#[derive(Debug, Clone, Default)]
pub struct HarnessReport {
    pub result: HarnessResult,
    /// Rendered regressions, one per failing response.
    pub regressions: Vec<String>,
    /// One line per failure listed in the ledger, with its ledger notes.
    pub expected: Vec<String>,
}

/// Run every fixture under `dir`, classifying failures against the
/// directory's expected-failures ledger.
pub fn run_harness(dir: &Path) -> SpecResult<HarnessReport> {
    let ledger = ExpectedFailures::load(&dir.join(EXPECTED_FAILURES_FILE))?;
    let mut report = HarnessReport::default();

    for (name, fixture) in load_all_fixtures(dir)? {
        let checks = run_fixture(&fixture)?;
        let mut fixture_totals = HarnessResult::new();

        for _ in &checks.passed {
            fixture_totals.record_pass();
        }
        for check in &checks.failed {
            let state = ledger.classify(&name, &check.response);
            fixture_totals.record_failure(state);
            if state == FailureState::Regression {
                let text = fixture.text_of(&check.cas);
                report
                    .regressions
                    .push(format_failure(&name, check, text.as_deref()));
            } else {
                let entry = ledger.get_entry(&name, &check.response);
                let line = format_expected_failure(&name, check, state, entry);
                log::info!("{}", line);
                report.expected.push(line);
            }
        }

        log::info!("{}", format_summary(&name, &fixture_totals).trim_end());
        report.result.total += fixture_totals.total;
        report.result.passed += fixture_totals.passed;
        report.result.expected_failures += fixture_totals.expected_failures;
        report.result.regressions += fixture_totals.regressions;
    }
    Ok(report)
}
