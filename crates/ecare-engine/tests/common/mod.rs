//! Common test utilities for engine integration tests.

use ecare_engine::{Classifier, ClassifierConfig, MatchMode};
use ecare_taxonomy::{Taxonomy, TaxonomyEntry};

/// The two-code table used by the engine contract examples.
pub fn contract_table() -> Taxonomy {
    Taxonomy::from_entries(vec![
        TaxonomyEntry::new("E1.", ["energy", "solar"]),
        TaxonomyEntry::new("C2.", ["care", "elderly"]),
    ])
    .expect("contract table is valid")
}

/// Classifier over the contract table with default configuration.
pub fn contract_classifier() -> Classifier {
    Classifier::new(contract_table())
}

/// Classifier over the bundled default table.
pub fn bundled_classifier() -> Classifier {
    Classifier::new(Taxonomy::bundled())
}

/// Classifier over the bundled table with an explicit match mode.
#[allow(dead_code)]
pub fn bundled_classifier_with_mode(mode: MatchMode) -> Classifier {
    let config = ClassifierConfig {
        match_mode: mode,
        ..Default::default()
    };
    Classifier::with_config(Taxonomy::bundled(), config)
}
