//! Error types for loading diffs.
//!
//! Building clauses never fails; only reading diff documents does.

use std::path::PathBuf;

/// Errors that can occur while loading table diffs.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// IO error (reading a diff file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The diff document is not valid JSON for a table diff.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The diff document decoded but cannot be rendered.
    #[error("Failed to parse diff file '{path}': {message}")]
    ParseError {
        /// Path to the diff file.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// The diff document holds no table diffs.
    #[error("No table diffs found in {0}")]
    EmptyInput(PathBuf),
}

/// Result type for diff loading.
pub type Result<T> = std::result::Result<T, DiffError>;
