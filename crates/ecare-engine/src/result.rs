//! Classification result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Output of one classification call.
///
/// `codes` holds the matched taxonomy codes in table order with
/// duplicates removed; `reasoning` holds exactly one entry per matched
/// code. Results are created fresh per call and owned by the caller.
///
/// The reasoning map is a `BTreeMap` so serialized key order is
/// deterministic; the match order of the codes is carried by `codes`,
/// not by the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Matched codes, in taxonomy table order.
    pub codes: Vec<String>,

    /// Per-code justification, keyed exactly by `codes`.
    pub reasoning: BTreeMap<String, String>,
}

impl ClassificationResult {
    /// The empty result (no keyword matched anything).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether no code matched.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Number of matched codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// The reasoning string for a matched code.
    pub fn reason_for(&self, code: &str) -> Option<&str> {
        self.reasoning.get(code).map(String::as_str)
    }
}

// ============================================================================
// Tests
// ============================================================================
