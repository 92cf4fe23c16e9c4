//! Hierarchical code level parsing.
//!
//! ECARE codes encode their position in the taxonomy hierarchy in their
//! shape: `A.` is a section, `A1.` a group inside it, `A1.01` an
//! activity inside the group. These functions recover that structure
//! from the code string alone; nothing else in the table format carries
//! hierarchy information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a code in the taxonomy hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeLevel {
    /// Top-level section, e.g. `A.`
    Section,
    /// Second-level group, e.g. `A1.`
    Group,
    /// Third-level activity, e.g. `A1.01`
    Activity,
    /// Any code outside the hierarchical shape.
    Other,
}

impl fmt::Display for CodeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Section => write!(f, "section"),
            Self::Group => write!(f, "group"),
            Self::Activity => write!(f, "activity"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Determine the hierarchy level of a code.
///
/// # Examples
///
/// ```
/// use ecare_taxonomy::{code_level, CodeLevel};
///
/// assert_eq!(code_level("A."), CodeLevel::Section);
/// assert_eq!(code_level("A1."), CodeLevel::Group);
/// assert_eq!(code_level("A1.01"), CodeLevel::Activity);
/// assert_eq!(code_level("misc"), CodeLevel::Other);
/// ```
pub fn code_level(code: &str) -> CodeLevel {
    let Some(first) = code.chars().next() else {
        return CodeLevel::Other;
    };
    if !first.is_ascii_uppercase() {
        return CodeLevel::Other;
    }

    let rest = &code[1..];
    if rest == "." {
        return CodeLevel::Section;
    }

    let Some(dot) = rest.find('.') else {
        return CodeLevel::Other;
    };
    let (digits, tail) = rest.split_at(dot);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return CodeLevel::Other;
    }

    let tail = &tail[1..];
    if tail.is_empty() {
        CodeLevel::Group
    } else if tail.bytes().all(|b| b.is_ascii_digit()) {
        CodeLevel::Activity
    } else {
        CodeLevel::Other
    }
}

/// Compute the parent code of a hierarchical code.
///
/// Activities roll up to their group, groups to their section. Sections
/// and non-hierarchical codes have no parent.
///
/// # Examples
///
/// ```
/// use ecare_taxonomy::parent_code;
///
/// assert_eq!(parent_code("A1.01"), Some("A1.".to_string()));
/// assert_eq!(parent_code("A1."), Some("A.".to_string()));
/// assert_eq!(parent_code("A."), None);
/// assert_eq!(parent_code("misc"), None);
/// ```
pub fn parent_code(code: &str) -> Option<String> {
    match code_level(code) {
        CodeLevel::Activity => {
            let prefix = code.split('.').next()?;
            Some(format!("{prefix}."))
        }
        CodeLevel::Group => code.chars().next().map(|c| format!("{c}.")),
        CodeLevel::Section | CodeLevel::Other => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // code_level tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_code_level_section() {
        assert_eq!(code_level("A."), CodeLevel::Section);
        assert_eq!(code_level("Z."), CodeLevel::Section);
    }

    #[test]
    fn test_code_level_group() {
        assert_eq!(code_level("A1."), CodeLevel::Group);
        assert_eq!(code_level("B12."), CodeLevel::Group);
    }

    #[test]
    fn test_code_level_activity() {
        assert_eq!(code_level("A1.01"), CodeLevel::Activity);
        assert_eq!(code_level("C10.3"), CodeLevel::Activity);
    }

    #[test]
    fn test_code_level_other() {
        assert_eq!(code_level(""), CodeLevel::Other);
        assert_eq!(code_level("a."), CodeLevel::Other);
        assert_eq!(code_level("A"), CodeLevel::Other);
        assert_eq!(code_level("AB."), CodeLevel::Other);
        assert_eq!(code_level("A1"), CodeLevel::Other);
        assert_eq!(code_level("A1.x"), CodeLevel::Other);
        assert_eq!(code_level("A1.01.2"), CodeLevel::Other);
        assert_eq!(code_level("misc"), CodeLevel::Other);
    }

    #[test]
    fn test_code_level_display() {
        assert_eq!(CodeLevel::Section.to_string(), "section");
        assert_eq!(CodeLevel::Group.to_string(), "group");
        assert_eq!(CodeLevel::Activity.to_string(), "activity");
        assert_eq!(CodeLevel::Other.to_string(), "other");
    }

    #[test]
    fn test_code_level_serialization() {
        let json = serde_json::to_string(&CodeLevel::Activity).unwrap();
        assert_eq!(json, "\"activity\"");
        let level: CodeLevel = serde_json::from_str("\"group\"").unwrap();
        assert_eq!(level, CodeLevel::Group);
    }

    // ------------------------------------------------------------------------
    // parent_code tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_parent_of_activity() {
        assert_eq!(parent_code("A1.01"), Some("A1.".to_string()));
        assert_eq!(parent_code("B12.34"), Some("B12.".to_string()));
    }

    #[test]
    fn test_parent_of_group() {
        assert_eq!(parent_code("A1."), Some("A.".to_string()));
        assert_eq!(parent_code("E2."), Some("E.".to_string()));
    }

    #[test]
    fn test_no_parent_for_section_or_other() {
        assert_eq!(parent_code("A."), None);
        assert_eq!(parent_code("misc"), None);
        assert_eq!(parent_code(""), None);
    }
}
