use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use unicat_types::University;

/// Program counts over a merged catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatistics {
    pub total_programs: usize,
    pub total_faculties: usize,
    /// Programs per faculty display name, summed across universities.
    pub programs_by_faculty: BTreeMap<String, usize>,
    /// Programs per university id.
    pub programs_by_university: BTreeMap<String, usize>,
    /// Ids of universities that list no programs, in catalog order.
    pub universities_without_programs: Vec<String>,
}

/// Count programs in one pass over the catalog.
///
/// A university with a blank id contributes nothing. Faculties are counted
/// under their display name as it stands, blank names included.
#[must_use]
pub fn compute_statistics(catalog: &[University]) -> CatalogStatistics {
    let mut stats = CatalogStatistics::default();

    for university in catalog {
        if university.id.trim().is_empty() {
            continue;
        }

        let mut programs = 0usize;
        for faculty in &university.faculties {
            let count = faculty.degrees.len();
            *stats
                .programs_by_faculty
                .entry(faculty.name.clone())
                .or_insert(0) += count;
            stats.total_faculties += 1;
            programs += count;
        }

        *stats
            .programs_by_university
            .entry(university.id.clone())
            .or_insert(0) += programs;
        stats.total_programs += programs;
        if programs == 0 {
            stats.universities_without_programs.push(university.id.clone());
        }
    }

    stats
}

/// Emit a summary of `stats` through `tracing`.
///
/// Logging is best effort and has no effect on the catalog.
pub fn log_statistics(stats: &CatalogStatistics) {
    info!(
        programs = stats.total_programs,
        faculties = stats.total_faculties,
        universities = stats.programs_by_university.len(),
        "Catalog program statistics"
    );
    for id in &stats.universities_without_programs {
        warn!(university = %id, "University lists no programs");
    }
}
