//! Reasoning string generation.
//!
//! Ties a matched code back to the text evidence that produced it. The
//! rule is deterministic: ALL keywords that matched are reported, in
//! keyword table order. Entries may override the generated phrasing
//! with a `reason_template` carrying `{code}`, `{keyword}`,
//! `{keywords}`, and `{description}` placeholders; `{keyword}` expands
//! to the first matched keyword.

use ecare_taxonomy::TaxonomyEntry;

/// Build the reasoning string for an entry and its matched keywords.
///
/// `matched` must be non-empty and ordered by keyword table position.
pub fn build_reason(entry: &TaxonomyEntry, matched: &[&str]) -> String {
    if let Some(template) = &entry.reason_template {
        return render_template(template, entry, matched);
    }

    let quoted = matched
        .iter()
        .map(|k| format!("'{k}'"))
        .collect::<Vec<_>>()
        .join(", ");

    match (&entry.description, matched.len()) {
        (Some(description), _) => format!(
            "{} ({description}): Matches keywords [{}]",
            entry.code,
            matched.join(", ")
        ),
        (None, 1) => format!(
            "Matched keyword {quoted} associated with code {}",
            entry.code
        ),
        (None, _) => format!(
            "Matched keywords {quoted} associated with code {}",
            entry.code
        ),
    }
}

/// Expand template placeholders against the match.
fn render_template(template: &str, entry: &TaxonomyEntry, matched: &[&str]) -> String {
    template
        .replace("{code}", &entry.code)
        .replace("{keywords}", &matched.join(", "))
        .replace("{keyword}", matched.first().copied().unwrap_or_default())
        .replace(
            "{description}",
            entry.description.as_deref().unwrap_or_default(),
        )
}

// ============================================================================
// Tests
// ============================================================================
