//! Integration tests for the classify path.

use crate::common::{bundled_classifier, contract_classifier};

#[test]
fn test_contract_scenario_end_to_end() {
    let result = contract_classifier().classify("Solar energy for elderly care communities");

    assert_eq!(result.codes, vec!["E1.", "C2."]);
    assert!(result.reason_for("E1.").unwrap().contains("solar"));
    assert!(result.reason_for("C2.").unwrap().contains("care"));
}

#[test]
fn test_bundled_table_company_description() {
    let result = bundled_classifier()
        .classify("We install rooftop solar panels and photovoltaic systems");

    assert_eq!(result.codes, vec!["E1."]);
    assert_eq!(
        result.reason_for("E1.").unwrap(),
        "E1. (Renewable Energy): Matches keywords [solar, photovoltaic]"
    );
}

#[test]
fn test_bundled_table_case_insensitive() {
    let classifier = bundled_classifier();
    let upper = classifier.classify("Healthcare Robotics");
    let lower = classifier.classify("healthcare robotics");

    assert_eq!(upper, lower);
    assert!(upper.codes.contains(&"C3.".to_string()));
}

#[test]
fn test_bundled_table_prose_with_section_rollup() {
    // All groups of section A. match, so they fold into the section;
    // the activity whose sibling is absent survives on its own.
    let result = bundled_classifier()
        .classify("Domiciliary care agency offering companionship visits for older adults");

    assert_eq!(result.codes, vec!["A.", "A1.01"]);
}

#[test]
fn test_bundled_table_no_match() {
    let result =
        bundled_classifier().classify("Quarterly financial report discussing revenue");
    assert!(result.is_empty());
}

#[test]
fn test_bundled_table_empty_input() {
    let result = bundled_classifier().classify("");
    assert!(result.codes.is_empty());
    assert!(result.reasoning.is_empty());
}

#[test]
fn test_wire_shape() {
    // The HTTP boundary serializes the result as-is; lock the shape.
    let result = contract_classifier().classify("solar power for elderly residents");
    let json = serde_json::to_value(&result).unwrap();

    let codes = json["codes"].as_array().unwrap();
    let reasoning = json["reasoning"].as_object().unwrap();
    assert_eq!(codes.len(), reasoning.len());
    for code in codes {
        assert!(reasoning.contains_key(code.as_str().unwrap()));
    }
}
