//! The immutable taxonomy table.
//!
//! A [`Taxonomy`] is constructed once at process start, validated
//! eagerly, and then shared read-only with every classification call.
//! Construction fails fast on duplicate codes rather than silently
//! overwriting earlier rows, and on entries that could never match
//! (no keywords).

use std::collections::HashMap;

use ecare_core::{text, Error, Result};

use crate::entry::TaxonomyEntry;
use crate::level::parent_code;
use crate::loader;

/// Immutable, ordered collection of taxonomy entries.
///
/// Iteration order is load order, and that order defines the order of
/// matched codes in classification results.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    entries: Vec<TaxonomyEntry>,
    by_code: HashMap<String, usize>,
    children: HashMap<String, Vec<String>>,
}

impl Taxonomy {
    /// Build a table from entries, enforcing table invariants.
    ///
    /// Keywords are normalized (trimmed, lowercased, inner whitespace
    /// collapsed) so matching is uniform; blank keywords are discarded
    /// and duplicates within an entry keep their first position.
    ///
    /// # Errors
    ///
    /// - a code is empty after trimming
    /// - the same code appears twice
    /// - an entry is left with no keywords
    pub fn from_entries(entries: Vec<TaxonomyEntry>) -> Result<Self> {
        let mut cleaned: Vec<TaxonomyEntry> = Vec::with_capacity(entries.len());
        let mut by_code: HashMap<String, usize> = HashMap::with_capacity(entries.len());

        for mut entry in entries {
            let code = entry.code.trim().to_string();
            if code.is_empty() {
                return Err(Error::validation("taxonomy entry has an empty code"));
            }
            if by_code.contains_key(&code) {
                return Err(Error::validation_field(
                    code.clone(),
                    "duplicate taxonomy code",
                ));
            }

            let mut keywords: Vec<String> = Vec::with_capacity(entry.keywords.len());
            for raw in &entry.keywords {
                let keyword = text::normalize(raw);
                if keyword.is_empty() || keywords.contains(&keyword) {
                    continue;
                }
                keywords.push(keyword);
            }
            if keywords.is_empty() {
                return Err(Error::validation_field(
                    code.clone(),
                    "entry has no keywords and can never match",
                ));
            }

            entry.code = code.clone();
            entry.keywords = keywords;
            by_code.insert(code, cleaned.len());
            cleaned.push(entry);
        }

        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        for entry in &cleaned {
            if let Some(parent) = parent_code(&entry.code) {
                if by_code.contains_key(&parent) {
                    children.entry(parent).or_default().push(entry.code.clone());
                }
            }
        }

        log::debug!(
            "taxonomy table loaded: {} codes, {} parent groups",
            cleaned.len(),
            children.len()
        );

        Ok(Self {
            entries: cleaned,
            by_code,
            children,
        })
    }

    /// The default table compiled into the crate.
    ///
    /// The same data lives at `data/default_taxonomy.csv` for external
    /// editing; this accessor makes the classifier usable with zero
    /// configuration.
    pub fn bundled() -> Self {
        loader::from_csv_str(loader::DEFAULT_TABLE_CSV)
            .expect("bundled taxonomy table is valid")
    }

    /// Look up an entry by exact code.
    pub fn get(&self, code: &str) -> Option<&TaxonomyEntry> {
        self.by_code.get(code).map(|&idx| &self.entries[idx])
    }

    /// Check whether a code exists in the table.
    pub fn contains_code(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// All entries, in table order.
    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    /// Iterate over entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, TaxonomyEntry> {
        self.entries.iter()
    }

    /// Child codes of a parent code that are present in this table,
    /// in table order. Empty for leaves and unknown codes.
    pub fn children_of(&self, code: &str) -> &[String] {
        self.children
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Taxonomy {
    type Item = &'a TaxonomyEntry;
    type IntoIter = std::slice::Iter<'a, TaxonomyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
