//! Builds the university catalog from JSON datasets.
//!
//! Usage:
//!   unicat core.json supplement.json --format listing
//!
//! Sources are merged in the order given, lowest precedence first. The
//! chosen export is printed to stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use unicat_catalog::{build_catalog, CatalogConfig};
use unicat_cli::{load_sources, render, write_report, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "unicat")]
#[command(about = "Merge university datasets into one catalog")]
struct Args {
    /// JSON datasets, lowest precedence first
    #[arg(required = true)]
    sources: Vec<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Export to print
    #[arg(short, long, value_enum, default_value = "metadata")]
    format: OutputFormat,

    /// APS score for the eligible export
    #[arg(long)]
    aps: Option<u32>,

    /// Write metadata and diagnostics to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => CatalogConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CatalogConfig::default(),
    };

    let sources = load_sources(&args.sources)?;
    let catalog = build_catalog(&sources, &config)?;

    if let Some(path) = &args.report {
        match write_report(&catalog, path) {
            Ok(()) => info!(path = %path.display(), "Diagnostics report written"),
            Err(e) => warn!(
                path = %path.display(),
                error = %e,
                "Failed to write diagnostics report"
            ),
        }
    }

    println!("{}", render(&catalog, args.format, args.aps)?);
    Ok(())
}
