//! Integration tests for hierarchy collapsing over the bundled table.

use ecare_engine::{Classifier, ClassifierConfig};
use ecare_taxonomy::Taxonomy;

use crate::common::bundled_classifier;

#[test]
fn test_group_absorbs_its_only_activity() {
    let result = bundled_classifier()
        .classify("Nursing clinic with physiotherapy and rehabilitation programmes");

    assert_eq!(result.codes, vec!["B1."]);
    let reason = result.reason_for("B1.").unwrap();
    assert!(reason.contains("nursing"));
    assert!(reason.contains("clinic"));
}

#[test]
fn test_collapse_disabled_keeps_activity() {
    let config = ClassifierConfig {
        collapse_children: false,
        ..Default::default()
    };
    let classifier = Classifier::with_config(Taxonomy::bundled(), config);

    let result =
        classifier.classify("Nursing clinic with physiotherapy and rehabilitation programmes");
    assert_eq!(result.codes, vec!["B1.", "B1.01"]);
}

#[test]
fn test_activity_alone_is_not_collapsed() {
    let result = bundled_classifier().classify("physiotherapy practice");
    assert_eq!(result.codes, vec!["B1.01"]);
}
