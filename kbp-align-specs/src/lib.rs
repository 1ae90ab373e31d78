//! Fixture-driven testing infrastructure for kbp-align.
//!
//! Alignment scenarios are written declaratively as TOML files: a document's
//! gold events, an optional parse and role table, and the responses to
//! align together with the gold mention each should land on.
//!
//! ## Modules
//!
//! - [`fixture`] - The fixture format and its conversion to aligner inputs
//! - [`loader`] - Loading fixtures from disk
//! - [`matcher`] - Checking alignment results against expectations
//! - [`runner`] - Running fixtures and whole fixture directories
//! - [`errors`] - Error types for the harness
//! - [`formatter`] - Failure and summary rendering
//! - [`failures`] - Expected failures tracking via TOML

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod matcher;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{parse_fixture, AlignmentFixture, Expectation, FixtureResponse};
pub use formatter::{format_expected_failure, format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture, EXPECTED_FAILURES_FILE};
pub use matcher::{check_response, CheckOutcome, CheckResult, MatchResult};
pub use runner::{run_fixture, run_harness, HarnessReport};
