//! CSV loading for taxonomy tables.
//!
//! Taxonomy tables are CSV files with the header
//! `code,description,keywords,reason_template`, where `keywords` is a
//! `;`-separated list. The `description` and `reason_template` columns
//! may be empty. Malformed rows abort the load with an error naming the
//! offending row; table invariants (unique codes, non-empty keyword
//! sets) are then enforced by [`Taxonomy::from_entries`].
//!
//! # Example
//!
//! ```rust
//! use ecare_taxonomy::Taxonomy;
//!
//! let csv = "\
//! code,description,keywords,reason_template
//! E1.,Renewable Energy,solar;photovoltaic,
//! ";
//! let taxonomy = Taxonomy::from_csv_str(csv).unwrap();
//! assert_eq!(taxonomy.len(), 1);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ecare_core::{Error, Result};
use serde::Deserialize;

use crate::entry::TaxonomyEntry;
use crate::table::Taxonomy;

/// The default table shipped with the crate (see `data/default_taxonomy.csv`).
pub(crate) const DEFAULT_TABLE_CSV: &str = include_str!("../data/default_taxonomy.csv");

/// One CSV row before keyword splitting.
#[derive(Debug, Deserialize)]
struct RawRow {
    code: String,
    #[serde(default)]
    description: Option<String>,
    keywords: String,
    #[serde(default)]
    reason_template: Option<String>,
}

/// Load a taxonomy table from any CSV reader.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Taxonomy> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (idx, row) in rdr.deserialize::<RawRow>().enumerate() {
        // Header occupies line 1
        let line = idx + 2;
        let row = row.map_err(|e| Error::parse(format!("row {line}: {e}")))?;

        let keywords: Vec<String> = row
            .keywords
            .split(';')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect();

        entries.push(TaxonomyEntry {
            code: row.code,
            description: row.description.filter(|d| !d.is_empty()),
            keywords,
            reason_template: row.reason_template.filter(|t| !t.is_empty()),
        });
    }

    Taxonomy::from_entries(entries)
}

/// Load a taxonomy table from a CSV string.
pub fn from_csv_str(data: &str) -> Result<Taxonomy> {
    from_csv_reader(data.as_bytes())
}

/// Load a taxonomy table from a CSV file on disk.
pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Taxonomy> {
    let path = path.as_ref();
    let file = File::open(path)?;
    from_csv_reader(file).map_err(|e| match e {
        Error::Parse { message } => {
            Error::parse(format!("{}: {message}", path.display()))
        }
        other => other,
    })
}

impl Taxonomy {
    /// Load a table from any CSV reader. See [`from_csv_reader`].
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        from_csv_reader(reader)
    }

    /// Load a table from a CSV string. See [`from_csv_str`].
    pub fn from_csv_str(data: &str) -> Result<Self> {
        from_csv_str(data)
    }

    /// Load a table from a CSV file. See [`from_csv_path`].
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        from_csv_path(path)
    }
}

// ============================================================================
// Tests
// ============================================================================
