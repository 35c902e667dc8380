//! Read-only projections over a merged catalog.

use std::collections::BTreeMap;

use serde::Serialize;
use unicat_types::{Degree, University, UniversityType};

use crate::config::CatalogConfig;

/// Bucket used by [`count_by_type`] for universities with no type.
pub const UNSPECIFIED_TYPE: &str = "Unspecified";

/// Universities whose `type` string equals `university_type` exactly.
#[must_use]
pub fn filter_by_type<'a>(catalog: &'a [University], university_type: &str) -> Vec<&'a University> {
    catalog
        .iter()
        .filter(|u| u.university_type == university_type)
        .collect()
}

/// Lookup by id.
#[must_use]
pub fn find_university<'a>(catalog: &'a [University], id: &str) -> Option<&'a University> {
    catalog.iter().find(|u| u.id == id)
}

/// Number of universities per type string.
///
/// The four known types are always present, with zero if unused.
#[must_use]
pub fn count_by_type(catalog: &[University]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = UniversityType::ALL
        .iter()
        .map(|kind| (kind.as_str().to_string(), 0))
        .collect();
    for university in catalog {
        let key = if university.university_type.is_empty() {
            UNSPECIFIED_TYPE
        } else {
            university.university_type.as_str()
        };
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Fallbacks for [`to_simplified_listing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDefaults {
    pub logo: String,
    pub abbreviation_length: usize,
}

impl Default for ListingDefaults {
    fn default() -> Self {
        CatalogConfig::default().listing_defaults()
    }
}

/// Lightweight listing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingEntry {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub full_name: String,
    pub logo: String,
}

/// Project each university to a [`ListingEntry`], filling absent fields.
///
/// - `name` falls back to the id
/// - `abbreviation` falls back to the first characters of the name, upper-cased
/// - `full_name` falls back to the name
/// - `logo` falls back to `defaults.logo`
#[must_use]
pub fn to_simplified_listing(
    catalog: &[University],
    defaults: &ListingDefaults,
) -> Vec<ListingEntry> {
    catalog
        .iter()
        .map(|u| {
            let name = if u.name.is_empty() {
                u.id.clone()
            } else {
                u.name.clone()
            };
            let abbreviation = if u.abbreviation.is_empty() {
                name.chars()
                    .take(defaults.abbreviation_length)
                    .collect::<String>()
                    .to_uppercase()
            } else {
                u.abbreviation.clone()
            };
            let full_name = if u.full_name.is_empty() {
                name.clone()
            } else {
                u.full_name.clone()
            };
            let logo = if u.logo.is_empty() {
                defaults.logo.clone()
            } else {
                u.logo.clone()
            };
            ListingEntry {
                id: u.id.clone(),
                name,
                abbreviation,
                full_name,
                logo,
            }
        })
        .collect()
}

/// A degree a given APS score qualifies for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreeMatch<'a> {
    pub university_id: &'a str,
    pub university_name: &'a str,
    pub faculty: &'a str,
    pub degree: &'a Degree,
}

/// Degrees whose APS requirement is at or below `aps_score`.
///
/// Degrees without a stated requirement are left out. Results are ordered
/// by requirement, then degree name, then university id.
#[must_use]
pub fn eligible_degrees(catalog: &[University], aps_score: u32) -> Vec<DegreeMatch<'_>> {
    let mut matches: Vec<DegreeMatch<'_>> = catalog
        .iter()
        .flat_map(move |u| {
            u.faculties.iter().flat_map(move |f| {
                f.degrees
                    .iter()
                    .filter(move |d| d.aps_requirement.is_some_and(|aps| aps <= aps_score))
                    .map(move |degree| DegreeMatch {
                        university_id: &u.id,
                        university_name: &u.name,
                        faculty: &f.name,
                        degree,
                    })
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        a.degree
            .aps_requirement
            .cmp(&b.degree.aps_requirement)
            .then_with(|| a.degree.name.cmp(&b.degree.name))
            .then_with(|| a.university_id.cmp(b.university_id))
    });
    matches
}
