//! errors.rs - Custom error types for the logsweep-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `logsweep-core` library.
///
/// Cancelling the scope prompt and running without a document are not errors;
/// those are reported through `RemovalOutcome`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SweepError {
    #[error("Failed to build removal pattern for slot {0}: {1}")]
    PatternBuildError(usize, regex::Error),

    #[error("Slot {0}: template length ({1}) exceeds maximum allowed ({2})")]
    TemplateLengthExceeded(usize, usize, usize),

    #[error("Pattern slot {0} is out of range (valid slots are 0..{1})")]
    SlotOutOfRange(usize, usize),

    #[error("Invalid pattern settings: {0}")]
    InvalidSettings(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
