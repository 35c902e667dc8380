use tracing::info;
use unicat_merge::{merge_sources, Source};
use unicat_types::{Diagnostic, University, UniversityType};

use crate::config::CatalogConfig;
use crate::error::CatalogResult;
use crate::metadata::{build_metadata, CatalogMetadata};
use crate::statistics::{compute_statistics, log_statistics, CatalogStatistics};
use crate::validate::{ingest_source, RawSource};
use crate::views::{
    eligible_degrees, filter_by_type, find_university, to_simplified_listing, DegreeMatch,
    ListingDefaults, ListingEntry,
};

/// A merged, read-only university catalog with its derived exports.
///
/// Built once by [`build_catalog`] or [`Catalog::from_sources`] and never
/// mutated afterwards. Views borrow from it.
#[derive(Debug, Clone)]
pub struct Catalog {
    universities: Vec<University>,
    statistics: CatalogStatistics,
    metadata: CatalogMetadata,
    diagnostics: Vec<Diagnostic>,
    listing_defaults: ListingDefaults,
}

/// Validate, merge and summarize raw datasets, lowest precedence first.
///
/// Fails only if a dataset is not a JSON array; the error names that dataset.
pub fn build_catalog(sources: &[RawSource], config: &CatalogConfig) -> CatalogResult<Catalog> {
    let mut typed = Vec::with_capacity(sources.len());
    let mut diagnostics = Vec::new();
    for raw in sources {
        let ingested = ingest_source(&raw.name, &raw.data)?;
        diagnostics.extend(ingested.diagnostics);
        typed.push(ingested.source);
    }
    Ok(Catalog::assemble(&typed, diagnostics, config))
}

impl Catalog {
    /// Build from already typed sources, lowest precedence first.
    #[must_use]
    pub fn from_sources(sources: &[Source], config: &CatalogConfig) -> Self {
        Self::assemble(sources, Vec::new(), config)
    }

    fn assemble(
        sources: &[Source],
        mut diagnostics: Vec<Diagnostic>,
        config: &CatalogConfig,
    ) -> Self {
        let outcome = merge_sources(sources);
        diagnostics.extend(outcome.diagnostics);

        let statistics = compute_statistics(&outcome.universities);
        log_statistics(&statistics);

        let skipped = diagnostics.iter().filter(|d| d.kind.is_skip()).count();
        let metadata = build_metadata(
            &outcome.universities,
            statistics.clone(),
            config,
            sources.len(),
            skipped,
        );

        info!(
            sources = sources.len(),
            universities = outcome.universities.len(),
            programs = statistics.total_programs,
            skipped,
            diagnostics = diagnostics.len(),
            "Catalog built"
        );

        Self {
            universities: outcome.universities,
            statistics,
            metadata,
            diagnostics,
            listing_defaults: config.listing_defaults(),
        }
    }

    /// All universities in first-seen order.
    #[must_use]
    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.universities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&University> {
        find_university(&self.universities, id)
    }

    #[must_use]
    pub fn of_type(&self, kind: UniversityType) -> Vec<&University> {
        filter_by_type(&self.universities, kind.as_str())
    }

    #[must_use]
    pub fn traditional(&self) -> Vec<&University> {
        self.of_type(UniversityType::Traditional)
    }

    #[must_use]
    pub fn universities_of_technology(&self) -> Vec<&University> {
        self.of_type(UniversityType::Technology)
    }

    #[must_use]
    pub fn comprehensive(&self) -> Vec<&University> {
        self.of_type(UniversityType::Comprehensive)
    }

    #[must_use]
    pub fn listing(&self) -> Vec<ListingEntry> {
        to_simplified_listing(&self.universities, &self.listing_defaults)
    }

    #[must_use]
    pub fn eligible_degrees(&self, aps_score: u32) -> Vec<DegreeMatch<'_>> {
        eligible_degrees(&self.universities, aps_score)
    }

    #[must_use]
    pub fn statistics(&self) -> &CatalogStatistics {
        &self.statistics
    }

    #[must_use]
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Everything skipped or coerced while building, in encounter order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
