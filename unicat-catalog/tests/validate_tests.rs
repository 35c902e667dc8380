use pretty_assertions::assert_eq;
use serde_json::json;
use unicat_catalog::{ingest_source, CatalogError, RawSource};
use unicat_types::DiagnosticKind;

// ── Top-level shape ──────────────────────────────────────────────

#[test]
fn non_array_source_is_rejected_with_its_name() {
    let err = ingest_source("supplementary", &json!({"id": "uct"})).unwrap_err();
    match &err {
        CatalogError::SourceNotArray { name, found } => {
            assert_eq!(name, "supplementary");
            assert_eq!(*found, "an object");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(format!("{err}").contains("supplementary"));
}

#[test]
fn null_source_is_rejected() {
    let err = ingest_source("core", &serde_json::Value::Null).unwrap_err();
    assert!(format!("{err}").contains("found null"));
}

#[test]
fn empty_array_is_an_empty_source() {
    let ingested = ingest_source("empty", &json!([])).unwrap();
    assert!(ingested.source.universities.is_empty());
    assert!(ingested.diagnostics.is_empty());
    assert_eq!(ingested.source.name, "empty");
}

// ── Sparse records ───────────────────────────────────────────────

#[test]
fn university_without_faculties_is_kept() {
    let ingested = ingest_source("s", &json!([{"id": "bad"}])).unwrap();
    let u = &ingested.source.universities[0];
    assert_eq!(u.id, "bad");
    assert!(u.faculties.is_empty());
    assert!(ingested.diagnostics.is_empty());
}

#[test]
fn null_fields_count_as_absent() {
    let ingested = ingest_source(
        "s",
        &json!([{"id": "x", "name": null, "faculties": null, "studentPopulation": null}]),
    )
    .unwrap();
    assert!(ingested.diagnostics.is_empty());
    assert_eq!(ingested.source.universities[0].name, "");
}

#[test]
fn reads_full_record() {
    let ingested = ingest_source(
        "core",
        &json!([{
            "id": "uct",
            "name": "University of Cape Town",
            "abbreviation": "UCT",
            "type": "Traditional University",
            "studentCount": 29000,
            "established": 1829,
            "campuses": ["Upper Campus", "Middle Campus"],
            "contactInfo": {"email": "admissions@uct.ac.za"},
            "applicationPeriods": [{"label": "Undergraduate", "opens": "April", "closes": "July"}],
            "faculties": [{
                "name": "Faculty of Commerce",
                "description": "Business and economics",
                "degrees": [{
                    "id": "bcom",
                    "name": "BCom",
                    "apsRequirement": 38,
                    "duration": 3,
                    "subjects": [{"name": "Mathematics", "level": 6, "isRequired": true}],
                    "careerProspects": ["Accountant"]
                }]
            }]
        }]),
    )
    .unwrap();

    assert!(ingested.diagnostics.is_empty());
    let u = &ingested.source.universities[0];
    assert_eq!(u.abbreviation, "UCT");
    assert_eq!(u.student_population, Some(29000));
    assert_eq!(u.established, Some(1829));
    assert_eq!(u.campuses.len(), 2);
    assert_eq!(
        u.contact_info.as_ref().and_then(|c| c.email.as_deref()),
        Some("admissions@uct.ac.za")
    );
    assert_eq!(u.application_periods[0].closes, "July");

    let degree = &u.faculties[0].degrees[0];
    assert_eq!(degree.aps_requirement, Some(38));
    assert_eq!(degree.duration, "3 years");
    assert_eq!(degree.subjects[0].level, 6);
    assert!(degree.subjects[0].is_required);
    assert_eq!(degree.career_prospects, vec!["Accountant"]);
}

// ── Skipped records ──────────────────────────────────────────────

#[test]
fn records_without_identity_are_skipped() {
    let ingested = ingest_source(
        "bulk",
        &json!([
            {"name": "Nameless University"},
            "not a record",
            {"id": "  "},
            {"id": "ok", "faculties": [
                {"description": "no name"},
                {"name": "Science", "degrees": [{"name": "BSc"}, {"id": "bsc"}, 7]}
            ]}
        ]),
    )
    .unwrap();

    let ids: Vec<&str> = ingested.source.universities.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["ok"]);
    let faculties = &ingested.source.universities[0].faculties;
    assert_eq!(faculties.len(), 2);
    assert_eq!(faculties[0].name, "");
    assert_eq!(faculties[1].degrees.len(), 1);
    assert_eq!(faculties[1].degrees[0].id, "bsc");

    let found: Vec<(DiagnosticKind, &str)> = ingested
        .diagnostics
        .iter()
        .map(|d| (d.kind, d.path.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            (DiagnosticKind::MissingUniversityId, "[0]"),
            (DiagnosticKind::NotAnObject, "[1]"),
            (DiagnosticKind::MissingUniversityId, "[2]"),
            (DiagnosticKind::CoercedField, "[3].faculties[0].name"),
            (DiagnosticKind::MissingDegreeId, "[3].faculties[1].degrees[0]"),
            (DiagnosticKind::NotAnObject, "[3].faculties[1].degrees[2]"),
        ]
    );
    assert!(ingested.diagnostics[0].message.contains("Nameless University"));
    assert!(ingested.diagnostics.iter().all(|d| d.source == "bulk"));
}

#[test]
fn faculty_without_string_name_keeps_its_degrees() {
    let ingested = ingest_source(
        "s",
        &json!([{"id": "uct", "faculties": [
            {"degrees": [{"id": "d1"}]},
            {"name": 7, "degrees": [{"id": "d2"}]},
            {"name": "  ", "degrees": [{"id": "d3"}]}
        ]}]),
    )
    .unwrap();

    let faculties = &ingested.source.universities[0].faculties;
    let names: Vec<&str> = faculties.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["", "", "  "]);
    assert_eq!(faculties[0].degrees[0].id, "d1");

    let found: Vec<(DiagnosticKind, &str)> = ingested
        .diagnostics
        .iter()
        .map(|d| (d.kind, d.path.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            (DiagnosticKind::CoercedField, "[0].faculties[0].name"),
            (DiagnosticKind::CoercedField, "[0].faculties[1].name"),
        ]
    );
    assert!(ingested.diagnostics.iter().all(|d| !d.kind.is_skip()));
}

#[test]
fn numeric_id_is_not_an_identity() {
    let ingested = ingest_source("s", &json!([{"id": 42}])).unwrap();
    assert!(ingested.source.universities.is_empty());
    assert_eq!(ingested.diagnostics[0].kind, DiagnosticKind::MissingUniversityId);
}

// ── Coerced fields ───────────────────────────────────────────────

#[test]
fn wrong_typed_fields_fall_back_to_defaults() {
    let ingested = ingest_source(
        "s",
        &json!([{
            "id": "x",
            "name": 12,
            "faculties": "none",
            "campuses": ["Main", 3],
            "studentPopulation": -5,
            "contactInfo": "call us"
        }]),
    )
    .unwrap();

    let u = &ingested.source.universities[0];
    assert_eq!(u.name, "");
    assert!(u.faculties.is_empty());
    assert_eq!(u.campuses, vec!["Main"]);
    assert_eq!(u.student_population, None);
    assert_eq!(u.contact_info, None);

    assert!(ingested
        .diagnostics
        .iter()
        .all(|d| d.kind == DiagnosticKind::CoercedField));
    let paths: Vec<&str> = ingested.diagnostics.iter().map(|d| d.path.as_str()).collect();
    assert!(paths.contains(&"[0].name"));
    assert!(paths.contains(&"[0].faculties"));
    assert!(paths.contains(&"[0].campuses[1]"));
    assert!(paths.contains(&"[0].studentPopulation"));
    assert!(paths.contains(&"[0].contactInfo"));
}

#[test]
fn aps_out_of_range_is_coerced() {
    let ingested = ingest_source(
        "s",
        &json!([{"id": "x", "faculties": [{"name": "F", "degrees": [
            {"id": "d", "apsRequirement": 99999999999u64}
        ]}]}]),
    )
    .unwrap();
    let degree = &ingested.source.universities[0].faculties[0].degrees[0];
    assert_eq!(degree.aps_requirement, None);
    assert_eq!(
        ingested.diagnostics[0].path,
        "[0].faculties[0].degrees[0].apsRequirement"
    );
}

// ── RawSource ────────────────────────────────────────────────────

#[test]
fn raw_source_parses_json_text() {
    let raw = RawSource::from_json_str("core", r#"[{"id": "wits"}]"#).unwrap();
    assert_eq!(raw.name, "core");
    assert_eq!(raw.data, json!([{"id": "wits"}]));
}

#[test]
fn raw_source_rejects_invalid_json() {
    let err = RawSource::from_json_str("core", "[{").unwrap_err();
    assert!(matches!(err, CatalogError::Serialization(_)));
}
