//! ECARE CLI
//!
//! Command-line interface for the ECARE keyword classifier.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ecare_cli::commands;
use ecare_engine::Classifier;

/// ECARE taxonomy keyword classifier
#[derive(Parser, Debug)]
#[command(name = "ecare")]
#[command(about = "Classify free-form text against the ECARE taxonomy", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify text against the taxonomy
    Classify {
        /// Text to classify; reads stdin when omitted or "-"
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Taxonomy CSV file (uses the bundled table when omitted)
        #[arg(short, long, env = "ECARE_TAXONOMY")]
        taxonomy: Option<PathBuf>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,

        /// Use plain substring matching instead of word boundaries
        #[arg(long)]
        substring: bool,

        /// Keep matched children even when their parent covers them
        #[arg(long)]
        no_collapse: bool,
    },

    /// Taxonomy table operations
    Taxonomy {
        #[command(subcommand)]
        action: TaxonomyAction,
    },
}

#[derive(Subcommand, Debug)]
enum TaxonomyAction {
    /// List the codes of the active table
    List {
        /// Taxonomy CSV file (uses the bundled table when omitted)
        #[arg(short, long, env = "ECARE_TAXONOMY")]
        taxonomy: Option<PathBuf>,
    },
    /// Validate an external CSV table
    Check {
        /// Path to the CSV file
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    match args.command {
        Command::Classify {
            text,
            file,
            taxonomy,
            json,
            substring,
            no_collapse,
        } => {
            let input = commands::read_input(text.as_deref(), file.as_deref())?;
            let table = commands::load_taxonomy(taxonomy.as_deref())?;
            let config = commands::build_config(substring, no_collapse);
            let classifier = Classifier::with_config(table, config);
            commands::cmd_classify(&classifier, &input, json)?;
        }
        Command::Taxonomy { action } => match action {
            TaxonomyAction::List { taxonomy } => {
                let table = commands::load_taxonomy(taxonomy.as_deref())?;
                commands::cmd_taxonomy_list(&table)?;
            }
            TaxonomyAction::Check { path } => {
                commands::cmd_taxonomy_check(&path)?;
            }
        },
    }

    Ok(())
}
