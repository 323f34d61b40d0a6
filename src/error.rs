//! Error types for artifact-eval operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for artifact-eval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during artifact analysis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Malformed or truncated PPM input.
    #[error("Invalid PPM: {path}: {reason}")]
    Format {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Buffer lengths or dimensions don't match between two images expected
    /// to be comparable.
    #[error("Size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Expected byte length.
        expected: usize,
        /// Actual byte length.
        actual: usize,
    },

    /// Analysis parameters invalid for the given input (empty series, zero
    /// or oversized period).
    #[error("Invalid analysis: {0}")]
    Analysis(String),

    /// Invalid test-pattern request.
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Build a `Format` error for the given path.
    pub(crate) fn format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
