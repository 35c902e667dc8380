use std::collections::HashSet;

use unicat_types::Faculty;

use crate::policy::overlay;

/// Identity key of a faculty within its university.
///
/// Faculty names from different sources differ in case and stray spacing,
/// so identity is the trimmed, lower-cased name.
#[must_use]
pub fn faculty_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Appends every incoming degree whose id is not yet in `existing`.
///
/// Existing order is preserved, new degrees follow in incoming order.
/// Returns the number of degrees appended.
pub(crate) fn union_degrees(existing: &mut Faculty, incoming: &Faculty) -> usize {
    let mut seen: HashSet<String> = existing.degrees.iter().map(|d| d.id.clone()).collect();
    let before = existing.degrees.len();
    for degree in &incoming.degrees {
        if seen.insert(degree.id.clone()) {
            existing.degrees.push(degree.clone());
        }
    }
    existing.degrees.len() - before
}

/// Folds `incoming` into `existing`: description by last-non-empty-wins,
/// degrees by union. The existing name spelling is kept.
pub(crate) fn merge_faculty(existing: &mut Faculty, incoming: &Faculty) {
    overlay(&mut existing.description, &incoming.description);
    union_degrees(existing, incoming);
}

/// Merges a list of faculties into `existing`, matching by [`faculty_key`].
pub(crate) fn merge_faculties(existing: &mut Vec<Faculty>, incoming: &[Faculty]) {
    for faculty in incoming {
        let key = faculty_key(&faculty.name);
        match existing.iter_mut().find(|f| faculty_key(&f.name) == key) {
            Some(matched) => merge_faculty(matched, faculty),
            None => existing.push(faculty.clone()),
        }
    }
}
