//! Text normalization and keyword containment matching.
//!
//! Provides the matching primitives the classification engine is built
//! on. Input text and keywords are normalized to the same form so that
//! containment checks are uniform and reproducible for identical input.

/// Normalize text to a matching-friendly form.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Collapses runs of whitespace (spaces, tabs, newlines) into single
///    spaces
///
/// Punctuation is preserved; boundary checks in [`contains_phrase`]
/// treat it as a word separator.
///
/// # Examples
///
/// ```
/// use ecare_core::text::normalize;
///
/// assert_eq!(normalize("Solar  Energy"), "solar energy");
/// assert_eq!(normalize("  Home\tCare\nServices  "), "home care services");
/// assert_eq!(normalize("UPPERCASE"), "uppercase");
/// ```
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Check whether `phrase` occurs in `text` on word boundaries.
///
/// Both arguments are expected to already be in [`normalize`]d form.
/// An occurrence counts only when it is not immediately preceded or
/// followed by an alphanumeric character, so `"cat"` does not match
/// inside `"category"` but does match in `"cat shelter"` or `"(cat)"`.
/// Multi-word phrases match against the single-space interior produced
/// by normalization.
///
/// An empty phrase never matches.
///
/// # Examples
///
/// ```
/// use ecare_core::text::contains_phrase;
///
/// assert!(contains_phrase("solar energy for communities", "solar energy"));
/// assert!(contains_phrase("grid-scale storage", "storage"));
/// assert!(!contains_phrase("classified under category b", "cat"));
/// assert!(!contains_phrase("anything", ""));
/// ```
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }

    let mut start = 0;
    while let Some(pos) = text[start..].find(phrase) {
        let begin = start + pos;
        let end = begin + phrase.len();

        let left_ok = text[..begin]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let right_ok = text[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());

        if left_ok && right_ok {
            return true;
        }

        // Resume scanning one character past this occurrence
        start = begin
            + text[begin..]
                .chars()
                .next()
                .map_or(1, |c| c.len_utf8());
    }

    false
}

/// Check whether `phrase` occurs anywhere in `text` (plain containment).
///
/// Both arguments are expected to already be in [`normalize`]d form.
/// Unlike [`contains_phrase`], no boundary check is applied, so `"cat"`
/// matches inside `"category"`. An empty phrase never matches.
///
/// # Examples
///
/// ```
/// use ecare_core::text::contains_substring;
///
/// assert!(contains_substring("classified under category b", "cat"));
/// assert!(!contains_substring("anything", ""));
/// ```
pub fn contains_substring(text: &str, phrase: &str) -> bool {
    !phrase.is_empty() && text.contains(phrase)
}

// ============================================================================
// Tests
// ============================================================================
