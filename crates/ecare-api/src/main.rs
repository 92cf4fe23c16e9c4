//! ECARE classification API server.
//!
//! Serves the keyword classifier over HTTP for the analyst-facing page.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ecare_api::{server, AppState};
use ecare_engine::{Classifier, ClassifierConfig};
use ecare_taxonomy::Taxonomy;

/// ECARE classification API
#[derive(Parser, Debug)]
#[command(name = "ecare-api")]
#[command(about = "HTTP API for the ECARE keyword classifier", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(short, long, env = "ECARE_API_ADDR", default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Taxonomy CSV file (uses the bundled table when omitted)
    #[arg(short, long, env = "ECARE_TAXONOMY")]
    taxonomy: Option<PathBuf>,

    /// Engine configuration TOML file
    #[arg(short, long, env = "ECARE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let taxonomy = match &args.taxonomy {
        Some(path) => Taxonomy::from_csv_path(path)?,
        None => Taxonomy::bundled(),
    };
    let config = match &args.config {
        Some(path) => ClassifierConfig::from_path(path)?,
        None => ClassifierConfig::default(),
    };

    let state = AppState::new(Classifier::with_config(taxonomy, config));
    server::serve(args.addr, state).await?;
    Ok(())
}
