//! Error types for the ECARE classifier crates.

/// Errors that can occur while loading taxonomy tables or configuration.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes. Classification
/// itself never produces an error: zero matches is a valid result, not
/// a failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Taxonomy invariant violation (duplicate code, empty keyword set, ...)
    #[error("Validation error: {message}")]
    Validation {
        /// Field, code, or row that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Malformed input data (CSV row, config file, ...)
    #[error("Parse error: {message}")]
    Parse {
        /// What could not be parsed
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for ECARE operations.
///
/// This is the standard Result type used throughout the classifier
/// codebase.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is retryable.
    ///
    /// Only I/O failures are considered transient; validation, parse, and
    /// configuration errors are permanent until the offending table or
    /// file is fixed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Validation { .. } => false,
            Error::Parse { .. } => false,
            Error::Config { .. } => false,
            Error::Serialization(_) => false,
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error naming the offending field or code.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
