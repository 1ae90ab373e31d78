//! Aligner configuration.

use serde::{Deserialize, Serialize};

use crate::extract::ResponseSpanKind;

/// Configuration for building an [`Aligner`](crate::Aligner).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignerConfig {
    /// Narrow response spans to their parse heads when an oracle is supplied.
    /// When false, response head views are always the plain spans.
    pub relax_with_heads: bool,
    /// Response views to expand into strategies, in priority order.
    pub response_views: Vec<ResponseSpanKind>,
}

impl AlignerConfig {
    /// Standard cascade: canonical argument, then base filler, with heads.
    pub fn standard() -> Self {
        Self {
            relax_with_heads: true,
            response_views: vec![
                ResponseSpanKind::CanonicalArgument,
                ResponseSpanKind::BaseFiller,
            ],
        }
    }

    pub fn without_heads(mut self) -> Self {
        self.relax_with_heads = false;
        self
    }

    fn uses_default_views(&self) -> bool {
        self.response_views == Self::standard().response_views
    }

    pub(crate) fn strategies(&self) -> crate::StrategyList {
        if self.uses_default_views() {
            crate::default_strategies()
        } else {
            crate::StrategyList::build(&self.response_views)
        }
    }
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self::standard()
    }
}
