//! ECARE Core — shared errors and text utilities.
//!
//! This crate provides the foundational types used across all ECARE
//! classifier crates. It has no internal ECARE dependencies (dependency
//! level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`text`]: Normalization and keyword containment matching

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod text;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from text
pub use text::{contains_phrase, contains_substring, normalize};
