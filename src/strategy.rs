//! The ordered list of alignment strategies.
//!
//! For each response view (canonical argument first, then base filler) the
//! same ten rules are laid out from strictest to most permissive:
//!
//! | tier | check                                   | role-gated |
//! |------|-----------------------------------------|------------|
//! | 1    | response span = gold extent             | yes        |
//! | 2    | response head = gold head               | yes        |
//! | 3    | response head = gold extent             | yes        |
//! | 4    | response span = gold head               | yes        |
//! | 5-8  | tiers 1-4 without the role check        | no         |
//! | 9    | containment with head guard             | yes        |
//! | 10   | containment with head guard             | no         |
//!
//! "gold head" falls back to the gold extent when no head is annotated, and
//! "response head" falls back to the response span when no parse is available.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::extract::{GoldSpanKind, ResponseSpanKind, ResponseView};
use crate::predicate::Predicate;

/// One rule of the cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    /// Position in the full list, 0-based. Lower is tried first.
    pub index: usize,
    /// The response view this rule was built for.
    pub view: ResponseSpanKind,
    pub predicate: Predicate,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.index, self.predicate)
    }
}

/// Immutable, shareable strategy list.
#[derive(Debug, Clone)]
pub struct StrategyList(Arc<[Strategy]>);

impl StrategyList {
    /// Build the cascade for the given views, in the given order.
    pub fn build(views: &[ResponseSpanKind]) -> Self {
        let strategies: Vec<Strategy> = views
            .iter()
            .flat_map(|&view| {
                rules_for_view(view)
                    .into_iter()
                    .map(move |p| (view, p))
            })
            .enumerate()
            .map(|(index, (view, predicate))| Strategy {
                index,
                view,
                predicate,
            })
            .collect();
        StrategyList(strategies.into())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Strategy> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Strategy> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Deref for StrategyList {
    type Target = [Strategy];

    fn deref(&self) -> &[Strategy] {
        &self.0
    }
}

static DEFAULT_STRATEGIES: Lazy<StrategyList> = Lazy::new(|| {
    StrategyList::build(&[
        ResponseSpanKind::CanonicalArgument,
        ResponseSpanKind::BaseFiller,
    ])
});

/// The canonical-argument-then-base-filler cascade, built once per process.
pub fn default_strategies() -> StrategyList {
    DEFAULT_STRATEGIES.clone()
}

fn rules_for_view(view: ResponseSpanKind) -> Vec<Predicate> {
    let span = ResponseView::span(view);
    let head = ResponseView::head(view);

    let exact_extent = Predicate::exact(span, GoldSpanKind::Extent);
    let exact_head = Predicate::exact(head, GoldSpanKind::HeadOrExtent);
    let head_to_extent = Predicate::exact(head, GoldSpanKind::Extent);
    let span_to_head = Predicate::exact(span, GoldSpanKind::HeadOrExtent);
    let containment = Predicate::Containment {
        response_extent: span,
        response_head: head,
        gold_extent: GoldSpanKind::Extent,
        gold_head: GoldSpanKind::HeadOrExtent,
    };

    let with_role = |p: &Predicate| Predicate::and(p.clone(), Predicate::RoleMatch);

    vec![
        with_role(&exact_extent),
        with_role(&exact_head),
        with_role(&head_to_extent),
        with_role(&span_to_head),
        exact_extent,
        exact_head,
        head_to_extent,
        span_to_head,
        with_role(&containment),
        containment,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let strategies = default_strategies();
        assert_eq!(strategies.len(), 20);

        let (cas, bf) = strategies.split_at(10);
        assert!(cas
            .iter()
            .all(|s| s.view == ResponseSpanKind::CanonicalArgument));
        assert!(bf.iter().all(|s| s.view == ResponseSpanKind::BaseFiller));

        let gated: Vec<bool> = cas.iter().map(|s| s.predicate.is_role_gated()).collect();
        assert_eq!(
            gated,
            vec![true, true, true, true, false, false, false, false, true, false]
        );

        for (i, s) in strategies.iter().enumerate() {
            assert_eq!(s.index, i);
        }
    }

    #[test]
    fn test_default_is_shared() {
        let a = default_strategies();
        let b = default_strategies();
        assert!(Arc::ptr_eq(&a.0, &b.0));
    }

    #[test]
    fn test_single_view() {
        let strategies = StrategyList::build(&[ResponseSpanKind::BaseFiller]);
        assert_eq!(strategies.len(), 10);
        assert_eq!(strategies[0].view, ResponseSpanKind::BaseFiller);
    }

    #[test]
    fn test_labels() {
        let labels = default_strategies()
            .iter()
            .take(10)
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(labels, @r###"
        #0 cas = gold extent & role
        #1 cas head = gold head & role
        #2 cas head = gold extent & role
        #3 cas = gold head & role
        #4 cas = gold extent
        #5 cas head = gold head
        #6 cas head = gold extent
        #7 cas = gold head
        #8 cas contains/within gold & role
        #9 cas contains/within gold
        "###);
    }
}
