//! Taxonomy entry representation.
//!
//! This module defines [`TaxonomyEntry`], one row of the ECARE table:
//! a stable code, its trigger keywords, and optional description and
//! reasoning template.
//!
//! # Creating Entries
//!
//! Entries can be created with the builder or direct construction:
//!
//! ```rust
//! use ecare_taxonomy::TaxonomyEntry;
//!
//! let entry = TaxonomyEntry::builder()
//!     .code("E1.")
//!     .description("Renewable Energy")
//!     .keyword("solar")
//!     .keyword("photovoltaic")
//!     .build();
//!
//! assert_eq!(entry.code, "E1.");
//! assert_eq!(entry.keywords.len(), 2);
//! ```
//!
//! Entry-level invariants (non-empty code, non-empty keyword set) are
//! enforced when the entry joins a [`Taxonomy`](crate::Taxonomy), not at
//! build time, so partially-filled builders stay usable in loaders.

use serde::{Deserialize, Serialize};

/// One ECARE code with its trigger keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    /// Stable short identifier, unique across the table (e.g. `A1.01`).
    pub code: String,

    /// Human-readable category description from the reference document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Lowercase trigger words and phrases, in match-priority order.
    pub keywords: Vec<String>,

    /// Optional reasoning template with `{code}`, `{keyword}`,
    /// `{keywords}`, and `{description}` placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_template: Option<String>,
}

impl TaxonomyEntry {
    /// Create a new entry builder.
    pub fn builder() -> TaxonomyEntryBuilder {
        TaxonomyEntryBuilder::default()
    }

    /// Create an entry from a code and keyword list.
    pub fn new<C, I, K>(code: C, keywords: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            code: code.into(),
            description: None,
            keywords: keywords.into_iter().map(Into::into).collect(),
            reason_template: None,
        }
    }
}

/// Builder for [`TaxonomyEntry`].
#[derive(Debug, Default)]
pub struct TaxonomyEntryBuilder {
    entry: TaxonomyEntry,
}

impl TaxonomyEntryBuilder {
    /// Set the taxonomy code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.entry.code = code.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entry.description = Some(description.into());
        self
    }

    /// Append a single keyword.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.entry.keywords.push(keyword.into());
        self
    }

    /// Set the full keyword list, replacing any keywords added so far.
    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.entry.keywords = keywords;
        self
    }

    /// Set the reasoning template.
    pub fn reason_template(mut self, template: impl Into<String>) -> Self {
        self.entry.reason_template = Some(template.into());
        self
    }

    /// Build the entry.
    pub fn build(self) -> TaxonomyEntry {
        self.entry
    }
}

// ============================================================================
// Tests
// ============================================================================
