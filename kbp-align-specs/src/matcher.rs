//! Comparing alignment results with fixture expectations.

use std::fmt;

use kbp_align::{AlignmentResult, Span};

use crate::fixture::{Expectation, FixtureResponse};

/// Result of checking every response in a fixture.
#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    pub passed: Vec<CheckResult>,
    pub failed: Vec<CheckResult>,
}

/// Result of checking a single response.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The response's id within its fixture.
    pub response: String,
    /// The canonical argument span, for locating the response in text.
    pub cas: Span,
    pub result: AlignmentResult,
    pub outcome: CheckOutcome,
}

/// Outcome of a check. The first mismatch found is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    WrongMention { expected: String, actual: String },
    WrongStrategy { expected: usize, actual: usize },
    WrongAmbiguity { expected: Vec<String>, actual: Vec<String> },
}

impl CheckOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Passed => f.write_str("passed"),
            CheckOutcome::WrongMention { expected, actual } => {
                write!(f, "expected `{}`, aligned to `{}`", expected, actual)
            }
            CheckOutcome::WrongStrategy { expected, actual } => {
                write!(f, "expected strategy #{}, won by #{}", expected, actual)
            }
            CheckOutcome::WrongAmbiguity { expected, actual } => write!(
                f,
                "expected ambiguous [{}], found [{}]",
                expected.join(", "),
                actual.join(", ")
            ),
        }
    }
}

/// Check one alignment result against its expectation.
pub fn check_response(expected: &FixtureResponse, result: &AlignmentResult) -> CheckOutcome {
    let actual_mention = match result.mention_id() {
        Some(id) => id.to_string(),
        None => "unmatched".to_string(),
    };
    let mention_ok = match expected.expectation() {
        Expectation::Mention(id) => result.mention_id() == Some(&id),
        Expectation::Unmatched => !result.is_matched(),
    };
    if !mention_ok {
        return CheckOutcome::WrongMention {
            expected: expected.expect.clone(),
            actual: actual_mention,
        };
    }

    if let (Some(want), Some(got)) = (expected.strategy, result.strategy()) {
        if want != got {
            return CheckOutcome::WrongStrategy {
                expected: want,
                actual: got,
            };
        }
    }

    if let Some(want) = &expected.ambiguous {
        let got: Vec<String> = result
            .ambiguity()
            .map(|a| {
                a.mention_ids()
                    .iter()
                    .map(|id| id.to_string())
                    .collect()
            })
            .unwrap_or_default();
        if &got != want {
            return CheckOutcome::WrongAmbiguity {
                expected: want.clone(),
                actual: got,
            };
        }
    }

    CheckOutcome::Passed
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, check: CheckResult) {
        if check.outcome.is_passed() {
            self.passed.push(check);
        } else {
            self.failed.push(check);
        }
    }

    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fixture;
    use kbp_align::{AlignedMention, Ambiguity, Candidate, MentionId, ScoringId};

    fn response(extra: &str) -> FixtureResponse {
        let toml = format!(
            "[document]\nid = \"d\"\n\n[[responses]]\nid = \"r\"\nevent_type = \"E\"\nrole = \"R\"\ncas = \"0-4\"\n{}",
            extra
        );
        parse_fixture(&toml).unwrap().responses.remove(0)
    }

    fn matched(id: &str, strategy: usize, others: &[&str]) -> AlignmentResult {
        let ambiguity = if others.is_empty() {
            None
        } else {
            Some(Ambiguity {
                response_id: "r".to_string(),
                candidates: std::iter::once(id)
                    .chain(others.iter().copied())
                    .map(|m| Candidate {
                        mention: MentionId::new(m),
                        scoring_id: ScoringId(m.to_string()),
                    })
                    .collect(),
            })
        };
        AlignmentResult::Matched(AlignedMention {
            mention: MentionId::new(id),
            scoring_id: ScoringId(id.to_string()),
            strategy,
            ambiguity,
        })
    }

    #[test]
    fn test_mention_and_unmatched() {
        let expect_a = response("expect = \"A\"");
        assert!(check_response(&expect_a, &matched("A", 3, &[])).is_passed());
        let expect_none = response("expect = \"unmatched\"");
        assert!(check_response(&expect_none, &AlignmentResult::Unmatched).is_passed());
        assert_eq!(
            check_response(&response("expect = \"A\""), &AlignmentResult::Unmatched),
            CheckOutcome::WrongMention {
                expected: "A".to_string(),
                actual: "unmatched".to_string(),
            }
        );
    }

    #[test]
    fn test_strategy_checked_when_given() {
        let outcome = check_response(
            &response("expect = \"A\"\nstrategy = 0"),
            &matched("A", 8, &[]),
        );
        assert_eq!(
            outcome,
            CheckOutcome::WrongStrategy {
                expected: 0,
                actual: 8
            }
        );
    }

    #[test]
    fn test_ambiguity() {
        let expected = response("expect = \"A\"\nambiguous = [\"A\", \"B\"]");
        let outcome = check_response(&expected, &matched("A", 4, &["B"]));
        assert!(outcome.is_passed());

        let none = response("expect = \"A\"\nambiguous = []");
        assert!(check_response(&none, &matched("A", 4, &[])).is_passed());
        insta::assert_snapshot!(
            check_response(&none, &matched("A", 4, &["B"])).to_string(),
            @"expected ambiguous [], found [A, B]"
        );
    }
}
