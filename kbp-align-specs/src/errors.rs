//! Error types for the fixture harness.

use kbp_align::AlignError;
use kbp_align_document::DocumentError;
use thiserror::Error;

/// Errors that can occur while loading or running fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Malformed fixture TOML.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error reading a fixture or ledger file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// A fixture that is well-formed TOML but not a usable scenario.
    #[error("assertion failed: {message}")]
    Assertion { message: String },

    /// Invalid spans, realis values or mention kinds.
    #[error(transparent)]
    Align(#[from] AlignError),

    /// The document text and parse trees disagree.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Result type for harness operations.
pub type SpecResult<T> = Result<T, SpecError>;
