//! # ecare-cli
//!
//! Command-line tools for the ECARE keyword classifier:
//! - `ecare classify` — classify text from an argument, file, or stdin
//! - `ecare taxonomy list` — inspect the active taxonomy table
//! - `ecare taxonomy check` — validate an external CSV table
//!
//! Zero matches is a result, not a failure: `classify` exits 0 either
//! way and prints an explicit "no codes matched" line in human mode.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod commands;
pub mod error;

pub use error::{Error, Result};
