//! Alignment outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{MentionId, ScoringId};

/// A gold mention that satisfied the winning strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub mention: MentionId,
    pub scoring_id: ScoringId,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.mention, self.scoring_id)
    }
}

/// Diagnostic recorded when the winning strategy matched more than one
/// scoring unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ambiguity {
    /// [`Response::unique_id`](crate::Response::unique_id) of the aligned response.
    pub response_id: String,
    /// Every matched mention, in inventory order.
    pub candidates: Vec<Candidate>,
}

impl Ambiguity {
    pub fn mention_ids(&self) -> Vec<&MentionId> {
        self.candidates.iter().map(|c| &c.mention).collect()
    }
}

impl fmt::Display for Ambiguity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let candidates = self
            .candidates
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "multiple gold matches for response {}: [{}]",
            self.response_id, candidates
        )
    }
}

/// A successful alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedMention {
    /// First matching mention in inventory order.
    pub mention: MentionId,
    pub scoring_id: ScoringId,
    /// Index of the strategy that produced the match.
    pub strategy: usize,
    /// Present when the strategy matched several scoring units.
    pub ambiguity: Option<Ambiguity>,
}

/// The result of aligning one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignmentResult {
    Matched(AlignedMention),
    Unmatched,
}

impl AlignmentResult {
    pub fn is_matched(&self) -> bool {
        matches!(self, AlignmentResult::Matched(_))
    }

    pub fn mention_id(&self) -> Option<&MentionId> {
        match self {
            AlignmentResult::Matched(m) => Some(&m.mention),
            AlignmentResult::Unmatched => None,
        }
    }

    pub fn scoring_id(&self) -> Option<&ScoringId> {
        match self {
            AlignmentResult::Matched(m) => Some(&m.scoring_id),
            AlignmentResult::Unmatched => None,
        }
    }

    pub fn strategy(&self) -> Option<usize> {
        match self {
            AlignmentResult::Matched(m) => Some(m.strategy),
            AlignmentResult::Unmatched => None,
        }
    }

    pub fn ambiguity(&self) -> Option<&Ambiguity> {
        match self {
            AlignmentResult::Matched(m) => m.ambiguity.as_ref(),
            AlignmentResult::Unmatched => None,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.ambiguity().is_some()
    }
}

impl fmt::Display for AlignmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentResult::Matched(m) => {
                write!(f, "{} ({}) via #{}", m.mention, m.scoring_id, m.strategy)?;
                if m.ambiguity.is_some() {
                    f.write_str(" [ambiguous]")?;
                }
                Ok(())
            }
            AlignmentResult::Unmatched => f.write_str("unmatched"),
        }
    }
}
