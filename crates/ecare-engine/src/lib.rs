//! Classification engine for the ECARE taxonomy.
//!
//! Takes free-form text and produces the set of ECARE codes whose
//! trigger keywords occur in it, with a human-readable justification per
//! code. Matching is binary (a code matches or it does not); there is no
//! scoring, ranking, or language analysis. Results are heuristic
//! first-pass suggestions, not authoritative classifications.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       ecare-engine                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Classifier (immutable Taxonomy + ClassifierConfig)         │
//! │  ├── normalize input (ecare-core)                           │
//! │  ├── keyword containment per entry, table order             │
//! │  └── hierarchy collapse (optional)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ClassifierConfig (match_mode, collapse_children)           │
//! │  MatchMode (WordBoundary | Substring)                       │
//! │  ClassificationResult (codes + reasoning)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Determinism
//!
//! For a fixed taxonomy table and configuration, `classify` is a pure
//! function: identical input yields identical code order (table order)
//! and identical reasoning strings on every call. There is no shared
//! mutable state, so one classifier can serve concurrent callers
//! without locking.
//!
//! # Example
//!
//! ```rust
//! use ecare_engine::Classifier;
//! use ecare_taxonomy::Taxonomy;
//!
//! let classifier = Classifier::new(Taxonomy::bundled());
//! let result = classifier.classify("Solar energy for elderly care communities");
//!
//! assert!(result.codes.contains(&"E1.".to_string()));
//! assert_eq!(result.codes.len(), result.reasoning.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod classifier;
pub mod config;
pub mod reason;
pub mod result;

// Re-exports
pub use classifier::Classifier;
pub use config::{ClassifierConfig, MatchMode};
pub use result::ClassificationResult;
