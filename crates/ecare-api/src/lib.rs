//! # ecare-api
//!
//! HTTP API server for the ECARE keyword classifier.
//!
//! This crate provides the web boundary around the engine:
//! - `POST /classify`: form field `text` in, `{codes, reasoning}` JSON out
//! - `GET /healthz`: liveness with taxonomy table size
//!
//! The classifier is built once at startup and shared lock-free across
//! requests; a classification call has no suspension point, so no
//! request-level coordination exists here beyond what axum provides.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod routes;
pub mod server;

pub use error::{Error, Result};
pub use routes::{router, AppState};
