//! Rendering harness diagnostics.

use crate::failures::{FailureEntry, FailureState, HarnessResult};
use crate::matcher::{CheckOutcome, CheckResult};

/// Format a failed check. `span_text` is the document text under the
/// response's canonical argument, when the fixture has text.
pub fn format_failure(
    fixture_name: &str,
    check: &CheckResult,
    span_text: Option<&str>,
) -> String {
    let mut lines = vec![
        String::new(),
        format!("FAIL: {}:{}", fixture_name, check.response),
        String::new(),
    ];

    match span_text {
        Some(text) => lines.push(format!("  response at {}: \"{}\"", check.cas, text)),
        None => lines.push(format!("  response at {}", check.cas)),
    }
    lines.push(format!("  {}", check.outcome));
    lines.push(format!("  aligned: {}", check.result));

    if let Some(hint) = hint(&check.outcome) {
        lines.push(String::new());
        lines.push(format!("  hint: {}", hint));
    }

    lines.join("\n") + "\n"
}

/// One line for a failure the ledger expects, with the entry's notes.
pub fn format_expected_failure(
    fixture_name: &str,
    check: &CheckResult,
    state: FailureState,
    entry: Option<&FailureEntry>,
) -> String {
    let label = match state {
        FailureState::Known => "KNOWN",
        FailureState::Pending => "PENDING",
        FailureState::Regression => "FAIL",
    };
    let mut line = format!(
        "{}: {}:{} {}",
        label, fixture_name, check.response, check.outcome
    );
    if let Some(notes) = entry.and_then(FailureEntry::notes) {
        line.push_str(&format!(" ({})", notes));
    }
    line
}

/// Format per-fixture totals.
pub fn format_summary(fixture_name: &str, totals: &HarnessResult) -> String {
    let status = if totals.success() { "PASS" } else { "FAIL" };
    let failed = totals.total - totals.passed;
    format!(
        "\n{}: {}\n  {} passed, {} failed ({} expected, {} regressions)\n",
        status, fixture_name, totals.passed, failed, totals.expected_failures, totals.regressions
    )
}

fn hint(outcome: &CheckOutcome) -> Option<&'static str> {
    match outcome {
        CheckOutcome::WrongStrategy { expected, actual } if actual > expected => {
            Some("a stricter rule did not fire; check heads and the role table")
        }
        CheckOutcome::WrongStrategy { .. } => {
            Some("a stricter rule fired first; the response may match more than intended")
        }
        CheckOutcome::WrongAmbiguity { .. } => {
            Some("ambiguity candidates are listed in inventory order")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kbp_align::{AlignedMention, AlignmentResult, MentionId, ScoringId, Span};

    fn check(outcome: CheckOutcome) -> CheckResult {
        CheckResult {
            response: "r1".to_string(),
            cas: Span::new(10, 20).unwrap(),
            result: AlignmentResult::Matched(AlignedMention {
                mention: MentionId::new("B"),
                scoring_id: ScoringId("E2".to_string()),
                strategy: 8,
                ambiguity: None,
            }),
            outcome,
        }
    }

    #[test]
    fn test_format_wrong_strategy() {
        let output = format_failure(
            "priority.toml",
            &check(CheckOutcome::WrongStrategy {
                expected: 0,
                actual: 8,
            }),
            Some("Mr. Smith"),
        );
        insta::assert_snapshot!(output.trim(), @r###"
        FAIL: priority.toml:r1

          response at 10-20: "Mr. Smith"
          expected strategy #0, won by #8
          aligned: B (E2) via #8

          hint: a stricter rule did not fire; check heads and the role table
        "###);
    }

    #[test]
    fn test_format_wrong_mention_without_text() {
        let output = format_failure(
            "no-match.toml",
            &check(CheckOutcome::WrongMention {
                expected: "unmatched".to_string(),
                actual: "B".to_string(),
            }),
            None,
        );
        assert!(output.contains("response at 10-20\n"));
        assert!(output.contains("expected `unmatched`, aligned to `B`"));
        assert!(!output.contains("hint"));
    }

    #[test]
    fn test_format_expected_failure_with_notes() {
        let entry = FailureEntry {
            fixture: "priority.toml".to_string(),
            response: "r1".to_string(),
            reason: Some("Awaiting head rules".to_string()),
            added: Some("2026-10-01".to_string()),
            issue: None,
        };
        let check = check(CheckOutcome::WrongStrategy {
            expected: 0,
            actual: 8,
        });
        insta::assert_snapshot!(
            format_expected_failure("priority.toml", &check, FailureState::Pending, Some(&entry)),
            @"PENDING: priority.toml:r1 expected strategy #0, won by #8 (Awaiting head rules; added 2026-10-01)"
        );
        assert_eq!(
            format_expected_failure("priority.toml", &check, FailureState::Known, None),
            "KNOWN: priority.toml:r1 expected strategy #0, won by #8"
        );
    }

    #[test]
    fn test_format_summary() {
        let mut totals = HarnessResult::new();
        totals.record_pass();
        totals.record_pass();
        totals.record_failure(FailureState::Known);
        insta::assert_snapshot!(format_summary("ambiguity.toml", &totals).trim(), @r###"
        PASS: ambiguity.toml
          2 passed, 1 failed (1 expected, 0 regressions)
        "###);
    }
}
