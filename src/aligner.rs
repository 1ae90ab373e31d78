//! Priority-ordered alignment of responses to gold mentions.
//!
//! An [`Aligner`] owns the immutable strategy list and can be shared across
//! documents and threads. [`Aligner::for_document`] binds it to one
//! document's mention inventory and collaborators, producing a
//! [`DocumentAligner`] whose [`align`](DocumentAligner::align) walks the
//! strategies in order and stops at the first one that matches anything.

use crate::predicate::MatchContext;
use crate::result::{AlignedMention, Ambiguity, Candidate};
use crate::{
    AlignerConfig, AlignmentResult, GoldMention, HeadLookup, MentionInventory, Response, RoleMap,
    Strategy, StrategyList,
};

/// Document-independent alignment engine.
#[derive(Debug, Clone)]
pub struct Aligner {
    config: AlignerConfig,
    strategies: StrategyList,
}

impl Aligner {
    pub fn new(config: AlignerConfig) -> Self {
        let strategies = config.strategies();
        Self { config, strategies }
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    pub fn strategies(&self) -> &StrategyList {
        &self.strategies
    }

    /// Bind to one document.
    ///
    /// `head_lookup` is ignored when the configuration disables head relaxation.
    pub fn for_document<'a>(
        &'a self,
        inventory: &'a MentionInventory,
        head_lookup: Option<&'a dyn HeadLookup>,
        role_map: &'a dyn RoleMap,
    ) -> DocumentAligner<'a> {
        let head_lookup = if self.config.relax_with_heads {
            head_lookup
        } else {
            None
        };
        DocumentAligner {
            strategies: &self.strategies,
            inventory,
            ctx: MatchContext::new(head_lookup, role_map),
        }
    }
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new(AlignerConfig::default())
    }
}

/// An [`Aligner`] bound to one document's gold mentions.
#[derive(Debug, Clone, Copy)]
pub struct DocumentAligner<'a> {
    strategies: &'a StrategyList,
    inventory: &'a MentionInventory,
    ctx: MatchContext<'a>,
}

impl<'a> DocumentAligner<'a> {
    /// Align one response.
    pub fn align(&self, response: &Response) -> AlignmentResult {
        for strategy in self.strategies.iter() {
            let matches = self.matches_for(strategy, response);
            if let Some(result) = self.resolve(strategy, response, &matches) {
                log::debug!(
                    "response {} aligned by strategy {}",
                    response.unique_id(),
                    strategy
                );
                return result;
            }
        }

        log::trace!("response {} matched no gold mention", response.unique_id());
        AlignmentResult::Unmatched
    }

    /// Align each response, preserving input order.
    pub fn align_all(&self, responses: &[Response]) -> Vec<AlignmentResult> {
        responses.iter().map(|r| self.align(r)).collect()
    }

    /// Every mention satisfying `strategy`, in inventory order.
    pub fn matches_for(&self, strategy: &Strategy, response: &Response) -> Vec<&'a GoldMention> {
        self.inventory
            .iter()
            .filter(|mention| strategy.predicate.holds(response, mention, &self.ctx))
            .collect()
    }

    fn resolve(
        &self,
        strategy: &Strategy,
        response: &Response,
        matches: &[&GoldMention],
    ) -> Option<AlignmentResult> {
        let first = matches.first()?;

        let mut scoring_ids = Vec::new();
        for mention in matches {
            let id = mention.scoring_id();
            if !scoring_ids.contains(&id) {
                scoring_ids.push(id);
            }
        }

        let ambiguity = if scoring_ids.len() > 1 {
            let ambiguity = Ambiguity {
                response_id: response.unique_id(),
                candidates: matches
                    .iter()
                    .map(|m| Candidate {
                        mention: m.id().clone(),
                        scoring_id: m.scoring_id(),
                    })
                    .collect(),
            };
            log::warn!("{}", ambiguity);
            Some(ambiguity)
        } else {
            None
        };

        Some(AlignmentResult::Matched(AlignedMention {
            mention: first.id().clone(),
            scoring_id: first.scoring_id(),
            strategy: strategy.index,
            ambiguity,
        }))
    }
}
