//! Handler functions for CLI commands.
//!
//! Each `cmd_*` function does the work for one subcommand and reports
//! on stdout; argument parsing stays in `main.rs`.

use std::io::Read;
use std::path::Path;

use ecare_engine::{Classifier, ClassifierConfig, MatchMode};
use ecare_taxonomy::{code_level, Taxonomy};

use crate::Result;

// ============================================================================
// Input resolution
// ============================================================================

/// Resolve the text to classify from argument, file, or stdin.
///
/// Priority: `--file` wins over a positional argument; a missing or `-`
/// argument reads stdin.
pub fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }
    match text {
        Some(t) if t != "-" => Ok(t.to_string()),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Load the taxonomy from a path, or fall back to the bundled table.
pub fn load_taxonomy(path: Option<&Path>) -> Result<Taxonomy> {
    match path {
        Some(p) => Ok(Taxonomy::from_csv_path(p)?),
        None => Ok(Taxonomy::bundled()),
    }
}

/// Build an engine configuration from CLI flags.
pub fn build_config(substring: bool, no_collapse: bool) -> ClassifierConfig {
    ClassifierConfig {
        match_mode: if substring {
            MatchMode::Substring
        } else {
            MatchMode::WordBoundary
        },
        collapse_children: !no_collapse,
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Classify text and print the result.
///
/// Human mode prints one `code  reason` line per match; `--json` emits
/// the engine result verbatim. Zero matches exits successfully.
pub fn cmd_classify(classifier: &Classifier, input: &str, json: bool) -> Result<()> {
    let result = classifier.classify(input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.is_empty() {
        println!("No codes matched.");
        return Ok(());
    }

    for code in &result.codes {
        let reason = result.reason_for(code).unwrap_or_default();
        println!("{code:<8} {reason}");
    }
    Ok(())
}

/// List the codes of a taxonomy table.
pub fn cmd_taxonomy_list(taxonomy: &Taxonomy) -> Result<()> {
    for entry in taxonomy {
        let description = entry.description.as_deref().unwrap_or("-");
        println!(
            "{:<8} {:<9} {:>2} keywords  {description}",
            entry.code,
            code_level(&entry.code).to_string(),
            entry.keywords.len(),
        );
    }
    println!("{} codes total", taxonomy.len());
    Ok(())
}

/// Validate an external CSV table.
///
/// Prints a summary on success; invariant violations and parse errors
/// propagate with the offending row named.
pub fn cmd_taxonomy_check(path: &Path) -> Result<()> {
    let taxonomy = Taxonomy::from_csv_path(path)?;
    println!(
        "OK: {} codes, {} keywords in {}",
        taxonomy.len(),
        taxonomy.iter().map(|e| e.keywords.len()).sum::<usize>(),
        path.display()
    );
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
