//! Error types for ecare-cli.

use thiserror::Error;

/// Result type alias for ecare-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ecare-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from ecare-core (taxonomy or config loading)
    #[error("Core error: {0}")]
    Core(#[from] ecare_core::Error),

    /// I/O error reading input text
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
