//! Error types for ecare-api.

use thiserror::Error;

/// Result type alias for ecare-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while starting or running the API server
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from ecare-core (taxonomy or config loading)
    #[error("Core error: {0}")]
    Core(#[from] ecare_core::Error),

    /// Socket or server I/O error
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
