//! The classifier.
//!
//! A [`Classifier`] pairs an immutable [`Taxonomy`] with a
//! [`ClassifierConfig`] and evaluates input text against every entry in
//! a single pass. Classification is pure: no mutable state, no I/O, no
//! error path. A classifier built once at process start can be shared
//! freely across threads.

use std::collections::HashSet;

use ecare_core::text;
use ecare_taxonomy::{Taxonomy, TaxonomyEntry};

use crate::config::ClassifierConfig;
use crate::reason;
use crate::result::ClassificationResult;

/// Keyword classifier over an immutable taxonomy table.
#[derive(Debug, Clone)]
pub struct Classifier {
    taxonomy: Taxonomy,
    config: ClassifierConfig,
}

impl Classifier {
    /// Create a classifier with the default configuration
    /// (word-boundary matching, hierarchy collapse enabled).
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self::with_config(taxonomy, ClassifierConfig::default())
    }

    /// Create a classifier with an explicit configuration.
    pub fn with_config(taxonomy: Taxonomy, config: ClassifierConfig) -> Self {
        Self { taxonomy, config }
    }

    /// The taxonomy table this classifier evaluates against.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// The active configuration.
    pub fn config(&self) -> ClassifierConfig {
        self.config
    }

    /// Classify text against the taxonomy table.
    ///
    /// The input is normalized (lowercased, whitespace collapsed) and
    /// each entry's keywords are tested for containment under the
    /// configured [`MatchMode`](crate::MatchMode), in table order. A
    /// code appears at most once no matter how many of its keywords
    /// matched; its reasoning string reports all of them, in keyword
    /// table order.
    ///
    /// Empty and whitespace-only input is valid and yields the empty
    /// result. This method never fails: zero matches is an outcome,
    /// not an error.
    pub fn classify(&self, input: &str) -> ClassificationResult {
        let normalized = text::normalize(input);
        if normalized.is_empty() {
            return ClassificationResult::empty();
        }

        let mut matches: Vec<(&TaxonomyEntry, Vec<&str>)> = Vec::new();
        for entry in &self.taxonomy {
            let hits: Vec<&str> = entry
                .keywords
                .iter()
                .filter(|keyword| self.config.match_mode.is_match(&normalized, keyword))
                .map(String::as_str)
                .collect();
            if !hits.is_empty() {
                matches.push((entry, hits));
            }
        }

        if self.config.collapse_children {
            matches = collapse_children(&self.taxonomy, matches);
        }

        let mut result = ClassificationResult::empty();
        for (entry, hits) in matches {
            result.codes.push(entry.code.clone());
            result
                .reasoning
                .insert(entry.code.clone(), reason::build_reason(entry, &hits));
        }

        log::debug!(
            "classified {} input chars into {} codes",
            input.len(),
            result.len()
        );
        result
    }
}

/// Drop matched children whose matched parent covers them completely.
///
/// A parent collapses its children only when the parent itself matched
/// and every child it has in the table matched too. Decisions are taken
/// against the original match set, so a group removed by its section
/// still collapses its own activities.
fn collapse_children<'a>(
    taxonomy: &Taxonomy,
    matches: Vec<(&'a TaxonomyEntry, Vec<&'a str>)>,
) -> Vec<(&'a TaxonomyEntry, Vec<&'a str>)> {
    let matched: HashSet<&str> = matches.iter().map(|(e, _)| e.code.as_str()).collect();

    let mut dropped: HashSet<&str> = HashSet::new();
    for (entry, _) in &matches {
        let children = taxonomy.children_of(&entry.code);
        if !children.is_empty() && children.iter().all(|c| matched.contains(c.as_str())) {
            dropped.extend(children.iter().map(String::as_str));
        }
    }

    matches
        .into_iter()
        .filter(|(entry, _)| !dropped.contains(entry.code.as_str()))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
