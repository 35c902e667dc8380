use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use unicat_types::University;

use crate::config::CatalogConfig;
use crate::statistics::CatalogStatistics;
use crate::views::count_by_type;

/// Summary export describing a built catalog and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub total_universities: usize,
    pub by_type: BTreeMap<String, usize>,
    pub program_statistics: CatalogStatistics,
    pub version: String,
    pub source: String,
    /// Number of datasets merged.
    pub source_count: usize,
    /// Records dropped for missing identity.
    pub skipped_records: usize,
}

#[must_use]
pub fn build_metadata(
    catalog: &[University],
    program_statistics: CatalogStatistics,
    config: &CatalogConfig,
    source_count: usize,
    skipped_records: usize,
) -> CatalogMetadata {
    CatalogMetadata {
        total_universities: catalog.len(),
        by_type: count_by_type(catalog),
        program_statistics,
        version: config.version.clone(),
        source: config.source_tag.clone(),
        source_count,
        skipped_records,
    }
}
