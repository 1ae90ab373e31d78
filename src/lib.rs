//! Alignment of extracted event arguments to gold-standard mentions.
//!
//! A system response identifies its argument only by character offsets.
//! This crate decides which gold entity or filler mention, if any, that
//! response refers to, using a strictly ordered cascade of matching rules.
//!
//! ## Core Types
//!
//! - [`Span`] - Inclusive character offset range; equality ignores debug text
//! - [`Response`] - A system-produced event argument
//! - [`GoldMention`] / [`MentionInventory`] - Gold arguments for one document
//! - [`RoleMap`] - Gold-to-response role translation
//! - [`HeadLookup`] - External syntactic head oracle
//! - [`Predicate`] / [`Strategy`] - The matching rules and their ordering
//! - [`Aligner`] / [`DocumentAligner`] - The cascade itself
//!
//! ## Example
//!
//! ```
//! use kbp_align::{
//!     Aligner, EntityMention, GoldMention, IdentityRoles, KbpString, MentionId,
//!     MentionInventory, Response, Span,
//! };
//!
//! let inventory: MentionInventory = vec![GoldMention::Entity(EntityMention {
//!     id: MentionId::new("A"),
//!     entity_id: "E1".to_string(),
//!     extent: Span::new(10, 20).unwrap(),
//!     head: Some(Span::new(10, 12).unwrap()),
//!     role: "Agent".to_string(),
//! })]
//! .into_iter()
//! .collect();
//!
//! let cas = KbpString::new("Mr. Smith", Span::new(10, 20).unwrap());
//! let response = Response::builder("doc", "Personnel.Elect", "Agent", cas).build();
//!
//! let aligner = Aligner::default();
//! let result = aligner
//!     .for_document(&inventory, None, &IdentityRoles)
//!     .align(&response);
//! assert_eq!(result.mention_id(), Some(&MentionId::new("A")));
//! assert_eq!(result.strategy(), Some(0));
//! ```

mod aligner;
mod config;
mod error;
mod head;
mod mention;
mod predicate;
mod response;
mod result;
mod role_map;
mod span;
mod strategy;

pub mod extract;

pub use aligner::{Aligner, DocumentAligner};
pub use config::AlignerConfig;
pub use error::{AlignError, AlignResult};
pub use head::{refine_head, resolve_head, HeadLookup, HeadRefinement};
pub use mention::{
    EntityMention, FillerMention, GoldMention, MentionId, MentionInventory, RawMention, ScoringId,
};
pub use predicate::{MatchContext, Predicate};
pub use response::{KbpString, Realis, Response, ResponseBuilder};
pub use result::{AlignedMention, AlignmentResult, Ambiguity, Candidate};
pub use role_map::{IdentityRoles, RoleMap, RoleTable};
pub use span::{format_span_set, parse_span_set, Span};
pub use strategy::{default_strategies, Strategy, StrategyList};
