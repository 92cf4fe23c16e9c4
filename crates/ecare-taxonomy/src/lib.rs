//! ECARE taxonomy tables.
//!
//! This crate holds the data model for the ECARE classification scheme:
//! entries mapping a taxonomy code to its trigger keywords, the immutable
//! [`Taxonomy`] table with its construction-time invariants, hierarchical
//! code levels, and CSV loading.
//!
//! # Table shape
//!
//! ECARE codes are hierarchical:
//!
//! | Level | Shape | Example |
//! |-------|-------|---------|
//! | Section | letter + `.` | `A.` |
//! | Group | letter + digits + `.` | `A1.` |
//! | Activity | letter + digits + `.` + digits | `A1.01` |
//!
//! Codes outside this shape are still legal table entries; they simply
//! have no parent.
//!
//! # Loading
//!
//! Tables are CSV files with header
//! `code,description,keywords,reason_template` (keywords `;`-separated),
//! so the taxonomy stays externally editable as the ECARE reference
//! document evolves. A default table is compiled into the crate via
//! [`Taxonomy::bundled`].
//!
//! # Example
//!
//! ```rust
//! use ecare_taxonomy::Taxonomy;
//!
//! let taxonomy = Taxonomy::bundled();
//! assert!(!taxonomy.is_empty());
//! assert!(taxonomy.get("A1.").is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod entry;
pub mod level;
pub mod loader;
pub mod table;

// Re-exports
pub use entry::{TaxonomyEntry, TaxonomyEntryBuilder};
pub use level::{code_level, parent_code, CodeLevel};
pub use table::Taxonomy;
