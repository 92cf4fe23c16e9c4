//! Engine configuration.
//!
//! The matching rule is fixed per classifier instance and applied
//! uniformly to every keyword, so results stay reproducible for
//! identical input. The default is word-boundary matching: `cat` does
//! not match inside `category`. Plain substring containment is
//! available for tables whose keywords are deliberately partial.

use std::path::Path;

use ecare_core::{text, Error, Result};
use serde::{Deserialize, Serialize};

/// How a keyword is located inside the normalized input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Containment on word boundaries: an occurrence abutting an
    /// alphanumeric character does not count.
    #[default]
    WordBoundary,
    /// Plain substring containment.
    Substring,
}

impl MatchMode {
    /// Test whether `keyword` occurs in `text` under this mode.
    ///
    /// Both arguments must already be normalized
    /// (see [`ecare_core::text::normalize`]).
    pub fn is_match(&self, text: &str, keyword: &str) -> bool {
        match self {
            Self::WordBoundary => text::contains_phrase(text, keyword),
            Self::Substring => text::contains_substring(text, keyword),
        }
    }
}

/// Configuration for a [`Classifier`](crate::Classifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Keyword containment rule.
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Collapse a matched parent's fully-matched children into the
    /// parent alone.
    #[serde(default = "default_true")]
    pub collapse_children: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::default(),
            collapse_children: default_true(),
        }
    }
}

impl ClassifierConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        toml::from_str(data).map_err(|e| Error::config(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))
    }
}

// ============================================================================
// Tests
// ============================================================================
