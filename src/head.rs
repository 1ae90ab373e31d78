//! Refinement of spans to their syntactic heads.
//!
//! The core never computes heads itself. It asks a [`HeadLookup`] supplied by
//! the caller and treats every failure to answer as "no refinement".

use crate::Span;

/// External syntactic-head oracle for one document.
pub trait HeadLookup: Sync {
    /// The head of the constituent covering exactly `span`, if known.
    fn head_of(&self, span: &Span) -> Option<Span>;
}

/// Outcome of asking for a span's head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadRefinement {
    /// The oracle found a narrower head span.
    Refined(Span),
    /// No oracle, no covering constituent, or no terminal head.
    Unrefined,
}

impl HeadRefinement {
    /// The refined span, or `original` when there was no refinement.
    pub fn or_original(self, original: &Span) -> Span {
        match self {
            HeadRefinement::Refined(head) => head,
            HeadRefinement::Unrefined => original.clone(),
        }
    }
}

/// Look up the head of `span`, if an oracle is available.
pub fn refine_head(span: &Span, lookup: Option<&dyn HeadLookup>) -> HeadRefinement {
    match lookup.and_then(|oracle| oracle.head_of(span)) {
        Some(head) => HeadRefinement::Refined(head),
        None => HeadRefinement::Unrefined,
    }
}

/// Resolve `span` to its head, falling back to `span` itself.
pub fn resolve_head(span: &Span, lookup: Option<&dyn HeadLookup>) -> Span {
    refine_head(span, lookup).or_original(span)
}
