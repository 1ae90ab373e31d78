//! Document-level inputs for kbp-align.
//!
//! This crate holds the gold event annotation for a document and a
//! constituency parse that can stand in as the syntactic head oracle.
//!
//! ## Core Types
//!
//! - [`GoldDocument`] - Events, event mentions and their argument mentions
//! - [`ParsedDocument`] - Parse trees implementing [`kbp_align::HeadLookup`]
//! - [`AnnotatedDocument`] - Gold plus optional parse, ready to align against
//!
//! ## Example
//!
//! ```
//! use kbp_align::{HeadLookup, Span};
//! use kbp_align_document::ParsedDocument;
//!
//! let doc = ParsedDocument::from_bracketed(
//!     "doc",
//!     "Rebels attacked Homs.",
//!     &["(S (NP (NNS* Rebels)) (VP* (VBD* attacked) (NP (NNP* Homs))) (. .))"],
//! )
//! .unwrap();
//! let head = doc.head_of(&Span::new(0, 20).unwrap()).unwrap();
//! assert_eq!(head.text(), Some("attacked"));
//! ```

mod bracket;
mod document;
mod error;
mod gold;
mod parse;

pub use bracket::parse_bracketed;
pub use document::AnnotatedDocument;
pub use error::{DocumentError, DocumentResult};
pub use gold::{GoldDocument, GoldEvent, GoldEventMention, RawGoldDocument};
pub use parse::{ParseNode, ParsedDocument, ParsedSentence, Token};
