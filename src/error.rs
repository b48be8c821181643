//! Error types for quickadd.
//!
//! The parsing engine itself is total and never produces these; they cover
//! configuration, I/O and output rendering around it.

use thiserror::Error;

/// Errors surfaced by the CLI and configuration layers.
#[derive(Debug, Error)]
pub enum QuickAddError {
    /// Configuration could not be located, read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command-line value was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
