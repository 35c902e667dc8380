use std::collections::HashSet;

use tracing::warn;
use unicat_types::{Diagnostic, DiagnosticKind, Faculty, University};

use crate::faculty::merge_faculties;
use crate::policy::overlay;

/// Produces the canonical form of one incoming record.
///
/// Degrees without an id are dropped with a diagnostic. Faculties that share
/// a key, including a blank one, are folded together and repeated degree ids
/// collapse to the first occurrence. Returns `None` when the university
/// itself has no id.
pub(crate) fn normalize_university(
    record: &University,
    source: &str,
    position: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<University> {
    let path = format!("[{position}]");
    if record.id.trim().is_empty() {
        let name = if record.name.is_empty() {
            "<unnamed>"
        } else {
            record.name.as_str()
        };
        warn!(source = %source, path = %path, "Skipping university without id");
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::MissingUniversityId,
            source,
            path,
            format!("university {name:?} has no id"),
        ));
        return None;
    }

    let mut faculties: Vec<Faculty> = Vec::with_capacity(record.faculties.len());
    for (fi, faculty) in record.faculties.iter().enumerate() {
        let faculty_path = format!("{path}.faculties[{fi}]");
        let mut clean = Faculty {
            name: faculty.name.clone(),
            description: faculty.description.clone(),
            degrees: Vec::with_capacity(faculty.degrees.len()),
        };
        let mut seen = HashSet::new();
        for (di, degree) in faculty.degrees.iter().enumerate() {
            if degree.id.trim().is_empty() {
                let degree_path = format!("{faculty_path}.degrees[{di}]");
                warn!(source = %source, path = %degree_path, "Skipping degree without id");
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::MissingDegreeId,
                    source,
                    degree_path,
                    format!("degree {:?} in {:?} has no id", degree.name, faculty.name),
                ));
                continue;
            }
            if seen.insert(degree.id.as_str()) {
                clean.degrees.push(degree.clone());
            }
        }
        merge_faculties(&mut faculties, std::slice::from_ref(&clean));
    }

    Some(University {
        faculties,
        ..clone_scalars(record)
    })
}

/// Folds a normalized `incoming` record into `existing`.
///
/// Returns the names of scalar fields whose value changed.
pub(crate) fn merge_university(
    existing: &mut University,
    incoming: &University,
) -> Vec<&'static str> {
    let mut changed = Vec::new();
    let mut apply = |name: &'static str, did_change: bool| {
        if did_change {
            changed.push(name);
        }
    };

    apply("name", overlay(&mut existing.name, &incoming.name));
    apply("abbreviation", overlay(&mut existing.abbreviation, &incoming.abbreviation));
    apply("fullName", overlay(&mut existing.full_name, &incoming.full_name));
    apply("type", overlay(&mut existing.university_type, &incoming.university_type));
    apply("description", overlay(&mut existing.description, &incoming.description));
    apply("location", overlay(&mut existing.location, &incoming.location));
    apply("province", overlay(&mut existing.province, &incoming.province));
    apply("website", overlay(&mut existing.website, &incoming.website));
    apply("logo", overlay(&mut existing.logo, &incoming.logo));
    apply("established", overlay(&mut existing.established, &incoming.established));
    apply(
        "studentPopulation",
        overlay(&mut existing.student_population, &incoming.student_population),
    );
    apply("campuses", overlay(&mut existing.campuses, &incoming.campuses));
    apply("contactInfo", overlay(&mut existing.contact_info, &incoming.contact_info));
    apply(
        "applicationPeriods",
        overlay(&mut existing.application_periods, &incoming.application_periods),
    );
    apply(
        "notableFeatures",
        overlay(&mut existing.notable_features, &incoming.notable_features),
    );

    merge_faculties(&mut existing.faculties, &incoming.faculties);
    changed
}

/// Copies every field except `faculties`.
fn clone_scalars(record: &University) -> University {
    University {
        id: record.id.clone(),
        name: record.name.clone(),
        abbreviation: record.abbreviation.clone(),
        full_name: record.full_name.clone(),
        university_type: record.university_type.clone(),
        description: record.description.clone(),
        location: record.location.clone(),
        province: record.province.clone(),
        website: record.website.clone(),
        logo: record.logo.clone(),
        established: record.established,
        student_population: record.student_population,
        campuses: record.campuses.clone(),
        contact_info: record.contact_info.clone(),
        application_periods: record.application_periods.clone(),
        notable_features: record.notable_features.clone(),
        faculties: Vec::new(),
    }
}
