//! Loading, rendering and reporting for the `unicat` binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use unicat_catalog::{Catalog, CatalogMetadata, RawSource};
use unicat_types::Diagnostic;

/// What to print on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Counts, type breakdown, program statistics and provenance.
    Metadata,
    /// The full merged catalog.
    Catalog,
    /// id, name, abbreviation, full name and logo per university.
    Listing,
    /// Program statistics only.
    Statistics,
    /// Degrees an APS score qualifies for (requires --aps).
    Eligible,
}

/// Read each file as a JSON dataset named after its file stem.
///
/// Order is preserved: the first path is the lowest-precedence source.
pub fn load_sources(paths: &[PathBuf]) -> Result<Vec<RawSource>> {
    paths
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read source {}", path.display()))?;
            RawSource::from_json_str(source_name(path), &text)
                .with_context(|| format!("failed to parse source {}", path.display()))
        })
        .collect()
}

fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Pretty JSON for the requested export.
pub fn render(catalog: &Catalog, format: OutputFormat, aps: Option<u32>) -> Result<String> {
    let json = match format {
        OutputFormat::Metadata => serde_json::to_string_pretty(catalog.metadata())?,
        OutputFormat::Catalog => serde_json::to_string_pretty(catalog.universities())?,
        OutputFormat::Listing => serde_json::to_string_pretty(&catalog.listing())?,
        OutputFormat::Statistics => serde_json::to_string_pretty(catalog.statistics())?,
        OutputFormat::Eligible => {
            let Some(score) = aps else {
                bail!("--format eligible requires --aps <SCORE>");
            };
            serde_json::to_string_pretty(&catalog.eligible_degrees(score))?
        }
    };
    Ok(json)
}

#[derive(Serialize)]
struct Report<'a> {
    metadata: &'a CatalogMetadata,
    diagnostics: &'a [Diagnostic],
}

/// Write metadata and every diagnostic to `path` as JSON.
pub fn write_report(catalog: &Catalog, path: &Path) -> Result<()> {
    let report = Report {
        metadata: catalog.metadata(),
        diagnostics: catalog.diagnostics(),
    };
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write report {}", path.display()))?;
    Ok(())
}
