//! Property-based tests over the assembled catalog.

use proptest::prelude::*;
use serde_json::{json, Value};
use unicat_catalog::{build_catalog, compute_statistics, CatalogConfig, RawSource};

fn degree_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => (0u8..6).prop_map(|n| json!({"id": format!("d{n}")})),
        1 => Just(json!({"name": "no id"})),
        1 => Just(json!(null)),
    ]
}

fn faculty_value() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(vec!["Science", "SCIENCE", "Law", ""]),
        prop::option::of(prop::collection::vec(degree_value(), 0..4)),
    )
        .prop_map(|(name, degrees)| match degrees {
            Some(degrees) => json!({"name": name, "degrees": degrees}),
            None => json!({"name": name}),
        })
}

fn university_value() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(vec!["uct", "wits", "up", ""]),
        prop::option::of(prop::collection::vec(faculty_value(), 0..3)),
    )
        .prop_map(|(id, faculties)| match faculties {
            Some(faculties) => json!({"id": id, "faculties": faculties}),
            None => json!({"id": id}),
        })
}

fn raw_sources() -> impl Strategy<Value = Vec<RawSource>> {
    prop::collection::vec(prop::collection::vec(university_value(), 0..4), 0..4).prop_map(
        |sources| {
            sources
                .into_iter()
                .enumerate()
                .map(|(i, items)| RawSource::new(format!("s{i}"), Value::Array(items)))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn building_never_fails_on_array_sources(sources in raw_sources()) {
        prop_assert!(build_catalog(&sources, &CatalogConfig::default()).is_ok());
    }

    #[test]
    fn total_programs_equals_degree_count(sources in raw_sources()) {
        let catalog = build_catalog(&sources, &CatalogConfig::default()).unwrap();
        let expected: usize = catalog
            .universities()
            .iter()
            .flat_map(|u| &u.faculties)
            .map(|f| f.degrees.len())
            .sum();
        prop_assert_eq!(catalog.statistics().total_programs, expected);
        prop_assert_eq!(catalog.statistics(), &compute_statistics(catalog.universities()));
    }

    #[test]
    fn per_university_totals_sum_to_total(sources in raw_sources()) {
        let catalog = build_catalog(&sources, &CatalogConfig::default()).unwrap();
        let stats = catalog.statistics();
        let by_university: usize = stats.programs_by_university.values().sum();
        let by_faculty: usize = stats.programs_by_faculty.values().sum();
        prop_assert_eq!(by_university, stats.total_programs);
        prop_assert_eq!(by_faculty, stats.total_programs);
    }

    #[test]
    fn skipped_count_matches_skip_diagnostics(sources in raw_sources()) {
        let catalog = build_catalog(&sources, &CatalogConfig::default()).unwrap();
        let skips = catalog.diagnostics().iter().filter(|d| d.kind.is_skip()).count();
        prop_assert_eq!(catalog.metadata().skipped_records, skips);
    }
}
