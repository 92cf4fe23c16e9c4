//! Property-based tests for engine invariants.

use proptest::prelude::*;

use crate::common::bundled_classifier;

proptest! {
    #[test]
    fn classify_is_deterministic(input in "\\PC{0,120}") {
        let classifier = bundled_classifier();
        prop_assert_eq!(classifier.classify(&input), classifier.classify(&input));
    }

    #[test]
    fn reasoning_keys_track_codes(input in "[a-zA-Z ]{0,120}") {
        let result = bundled_classifier().classify(&input);
        prop_assert_eq!(result.codes.len(), result.reasoning.len());
        for code in &result.codes {
            prop_assert!(result.reasoning.contains_key(code));
        }
    }

    #[test]
    fn case_does_not_change_result(input in "[a-zA-Z ]{0,120}") {
        let classifier = bundled_classifier();
        prop_assert_eq!(
            classifier.classify(&input.to_uppercase()),
            classifier.classify(&input.to_lowercase())
        );
    }

    #[test]
    fn codes_never_duplicate(input in "[a-z .,]{0,200}") {
        let result = bundled_classifier().classify(&input);
        let mut seen = std::collections::HashSet::new();
        for code in &result.codes {
            prop_assert!(seen.insert(code.clone()), "duplicate code {}", code);
        }
    }
}
