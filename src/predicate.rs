//! Match predicates between a response and a gold mention.
//!
//! Predicates are plain data: a strategy list is a sequence of these values
//! built once and evaluated against a [`MatchContext`].

use std::fmt;

use crate::extract::{GoldSpanKind, ResponseView};
use crate::{GoldMention, HeadLookup, Response, RoleMap, Span};

/// Per-document collaborators a predicate may consult.
#[derive(Clone, Copy)]
pub struct MatchContext<'a> {
    pub head_lookup: Option<&'a dyn HeadLookup>,
    pub role_map: &'a dyn RoleMap,
}

impl<'a> MatchContext<'a> {
    pub fn new(head_lookup: Option<&'a dyn HeadLookup>, role_map: &'a dyn RoleMap) -> Self {
        Self {
            head_lookup,
            role_map,
        }
    }
}

impl fmt::Debug for MatchContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchContext")
            .field("has_head_lookup", &self.head_lookup.is_some())
            .finish()
    }
}

/// A binary check between a response and a gold mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// The response view equals the gold span, by offsets.
    ExactSpan {
        response: ResponseView,
        gold: GoldSpanKind,
    },
    /// One extent encloses the other, and the enclosing extent also
    /// encloses both heads.
    Containment {
        response_extent: ResponseView,
        response_head: ResponseView,
        gold_extent: GoldSpanKind,
        gold_head: GoldSpanKind,
    },
    /// The gold role, mapped into the response vocabulary, equals the
    /// response role exactly.
    RoleMatch,
    /// Both predicates hold. The left side is evaluated first.
    And(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
    pub fn exact(response: ResponseView, gold: GoldSpanKind) -> Self {
        Predicate::ExactSpan { response, gold }
    }

    pub fn and(first: Predicate, second: Predicate) -> Self {
        Predicate::And(Box::new(first), Box::new(second))
    }

    pub fn holds(
        &self,
        response: &Response,
        mention: &GoldMention,
        ctx: &MatchContext<'_>,
    ) -> bool {
        match self {
            Predicate::ExactSpan {
                response: view,
                gold,
            } => view.extract(response, ctx.head_lookup) == *gold.extract(mention),
            Predicate::Containment {
                response_extent,
                response_head,
                gold_extent,
                gold_head,
            } => {
                let r_extent = response_extent.extract(response, ctx.head_lookup);
                let r_head = response_head.extract(response, ctx.head_lookup);
                let g_extent = gold_extent.extract(mention);
                let g_head = gold_head.extract(mention);

                let covers_heads = |outer: &Span| outer.encloses(&r_head) && outer.encloses(g_head);
                (r_extent.encloses(g_extent) && covers_heads(&r_extent))
                    || (g_extent.encloses(&r_extent) && covers_heads(g_extent))
            }
            Predicate::RoleMatch => ctx
                .role_map
                .map_role(mention.role())
                .map_or(false, |mapped| mapped == response.role()),
            Predicate::And(first, second) => {
                first.holds(response, mention, ctx) && second.holds(response, mention, ctx)
            }
        }
    }

    /// True if any part of this predicate checks roles.
    pub fn is_role_gated(&self) -> bool {
        match self {
            Predicate::RoleMatch => true,
            Predicate::And(first, second) => first.is_role_gated() || second.is_role_gated(),
            Predicate::ExactSpan { .. } | Predicate::Containment { .. } => false,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::ExactSpan { response, gold } => write!(f, "{} = gold {}", response, gold),
            Predicate::Containment { response_extent, .. } => {
                write!(f, "{} contains/within gold", response_extent)
            }
            Predicate::RoleMatch => f.write_str("role"),
            Predicate::And(first, second) => write!(f, "{} & {}", first, second),
        }
    }
}
