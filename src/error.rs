//! Error types for the alignment core.
//!
//! Alignment itself never fails. Errors only arise while turning
//! collaborator data into the core's typed values.

use thiserror::Error;

/// Errors raised while constructing alignment inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// A span whose start lies after its end.
    #[error("invalid span: start {start} is after end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// An offset string that is not of the form `start-end`.
    #[error("malformed span {input:?}: expected `start-end`")]
    MalformedSpan { input: String },

    /// An explicit span list with no members. Empty sets are written `NIL`.
    #[error("empty span sets must be written as NIL")]
    EmptySpanSet,

    /// A gold mention of a kind the aligner does not know how to read.
    ///
    /// This is a collaborator contract violation and must stop processing.
    #[error("unknown gold mention kind {kind:?} for mention {mention}")]
    UnknownMentionKind { mention: String, kind: String },

    /// A realis label outside `Actual`, `Generic`, `Other`.
    #[error("unknown realis {input:?}")]
    UnknownRealis { input: String },
}

/// Result type for alignment input construction.
pub type AlignResult<T> = Result<T, AlignError>;
