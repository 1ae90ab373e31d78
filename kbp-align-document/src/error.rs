//! Error types for document construction.

use kbp_align::AlignError;
use thiserror::Error;

/// Errors that can occur while building gold or parsed documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Malformed bracketed parse tree.
    #[error("tree syntax error at position {position}: {message}")]
    Tree { position: usize, message: String },

    /// A tree token that does not occur in the document text.
    #[error("token {token:?} not found in text after offset {from}")]
    TokenNotFound { token: String, from: usize },

    /// A constituent with no children, or a head index out of range.
    #[error("invalid constituent {label}: {message}")]
    Constituent { label: String, message: String },

    /// RON decoding failure.
    #[error(transparent)]
    Ron(#[from] ron::error::SpannedError),

    /// Invalid alignment input, including unknown mention kinds.
    #[error(transparent)]
    Align(#[from] AlignError),
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;
