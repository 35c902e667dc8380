//! Validation boundary between raw JSON datasets and typed records.
//!
//! Datasets are authored by hand and disagree on shape. Every record is read
//! field by field: missing optional fields default to empty, optional fields
//! with the wrong JSON type default to empty and are reported as
//! [`DiagnosticKind::CoercedField`], and universities or degrees without an
//! id are skipped. A faculty without a string name is kept under the blank
//! name. Only a dataset that is not an array at all is an error.

use serde_json::{Map, Value};
use tracing::{debug, warn};
use unicat_merge::Source;
use unicat_types::{
    ApplicationPeriod, ContactInfo, Degree, Diagnostic, DiagnosticKind, Faculty,
    SubjectRequirement, University,
};

use crate::error::{CatalogError, CatalogResult};

/// A dataset as loaded, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSource {
    pub name: String,
    pub data: Value,
}

impl RawSource {
    pub fn new(name: impl Into<String>, data: Value) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Parse a dataset from JSON text.
    pub fn from_json_str(name: impl Into<String>, json: &str) -> CatalogResult<Self> {
        Ok(Self::new(name, serde_json::from_str(json)?))
    }
}

/// A validated dataset and the anomalies found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestedSource {
    pub source: Source,
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert one raw dataset into typed records.
///
/// Fails only when `data` is not a JSON array.
pub fn ingest_source(name: &str, data: &Value) -> CatalogResult<IngestedSource> {
    let Value::Array(items) = data else {
        return Err(CatalogError::SourceNotArray {
            name: name.to_string(),
            found: json_kind(data),
        });
    };

    let mut reader = RecordReader {
        source: name,
        diagnostics: Vec::new(),
    };
    let universities: Vec<University> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| reader.university(item, &format!("[{i}]")))
        .collect();

    debug!(
        source = %name,
        records = items.len(),
        accepted = universities.len(),
        diagnostics = reader.diagnostics.len(),
        "Source ingested"
    );

    Ok(IngestedSource {
        source: Source::new(name, universities),
        diagnostics: reader.diagnostics,
    })
}

/// Name of a JSON value's type, for messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

struct RecordReader<'a> {
    source: &'a str,
    diagnostics: Vec<Diagnostic>,
}

impl RecordReader<'_> {
    fn report(&mut self, kind: DiagnosticKind, path: String, message: String) {
        if kind.is_skip() {
            warn!(source = %self.source, path = %path, "{message}");
        } else {
            debug!(source = %self.source, path = %path, "{message}");
        }
        self.diagnostics
            .push(Diagnostic::new(kind, self.source, path, message));
    }

    fn coerced(&mut self, path: &str, key: &str, expected: &str, found: &Value) {
        self.report(
            DiagnosticKind::CoercedField,
            format!("{path}.{key}"),
            format!("expected {expected}, found {}; using default", json_kind(found)),
        );
    }

    /// Present, non-null value of `key`.
    fn field<'v>(obj: &'v Map<String, Value>, key: &str) -> Option<&'v Value> {
        obj.get(key).filter(|v| !v.is_null())
    }

    fn university(&mut self, item: &Value, path: &str) -> Option<University> {
        let Some(obj) = item.as_object() else {
            self.report(
                DiagnosticKind::NotAnObject,
                path.to_string(),
                format!("expected a university object, found {}", json_kind(item)),
            );
            return None;
        };

        let Some(id) = Self::identity(obj, "id") else {
            let name = self.string(obj, "name", path);
            let label = if name.is_empty() {
                "<unnamed>".to_string()
            } else {
                name
            };
            self.report(
                DiagnosticKind::MissingUniversityId,
                path.to_string(),
                format!("university {label:?} has no id; skipped"),
            );
            return None;
        };

        let faculties: Vec<Faculty> = self
            .list(obj, "faculties", path)
            .iter()
            .enumerate()
            .filter_map(|(i, f)| self.faculty(f, &format!("{path}.faculties[{i}]")))
            .collect();

        Some(University {
            name: self.string(obj, "name", path),
            abbreviation: self.string(obj, "abbreviation", path),
            full_name: self.string(obj, "fullName", path),
            university_type: self.string(obj, "type", path),
            description: self.string(obj, "description", path),
            location: self.string(obj, "location", path),
            province: self.string(obj, "province", path),
            website: self.string(obj, "website", path),
            logo: self.string(obj, "logo", path),
            established: self.number(obj, "established", path),
            student_population: self
                .number(obj, "studentPopulation", path)
                .or_else(|| self.number(obj, "studentCount", path)),
            campuses: self.strings(obj, "campuses", path),
            contact_info: self.contact_info(obj, path),
            application_periods: self
                .list(obj, "applicationPeriods", path)
                .iter()
                .enumerate()
                .filter_map(|(i, p)| {
                    self.application_period(p, &format!("{path}.applicationPeriods[{i}]"))
                })
                .collect(),
            notable_features: self.strings(obj, "notableFeatures", path),
            faculties,
            id,
        })
    }

    fn faculty(&mut self, item: &Value, path: &str) -> Option<Faculty> {
        let Some(obj) = item.as_object() else {
            self.report(
                DiagnosticKind::NotAnObject,
                path.to_string(),
                format!("expected a faculty object, found {}", json_kind(item)),
            );
            return None;
        };
        let name = match Self::field(obj, "name") {
            Some(Value::String(name)) => name.clone(),
            other => {
                let found = other.map_or("nothing", json_kind);
                self.report(
                    DiagnosticKind::CoercedField,
                    format!("{path}.name"),
                    format!("expected a faculty name, found {found}; using a blank name"),
                );
                String::new()
            }
        };

        let degrees: Vec<Degree> = self
            .list(obj, "degrees", path)
            .iter()
            .enumerate()
            .filter_map(|(i, d)| self.degree(d, &format!("{path}.degrees[{i}]")))
            .collect();

        Some(Faculty {
            description: self.string(obj, "description", path),
            name,
            degrees,
        })
    }

    fn degree(&mut self, item: &Value, path: &str) -> Option<Degree> {
        let Some(obj) = item.as_object() else {
            self.report(
                DiagnosticKind::NotAnObject,
                path.to_string(),
                format!("expected a degree object, found {}", json_kind(item)),
            );
            return None;
        };
        let Some(id) = Self::identity(obj, "id") else {
            let name = self.string(obj, "name", path);
            self.report(
                DiagnosticKind::MissingDegreeId,
                path.to_string(),
                format!("degree {name:?} has no id; skipped"),
            );
            return None;
        };

        let subjects: Vec<SubjectRequirement> = self
            .list(obj, "subjects", path)
            .iter()
            .enumerate()
            .filter_map(|(i, s)| self.subject(s, &format!("{path}.subjects[{i}]")))
            .collect();

        Some(Degree {
            name: self.string(obj, "name", path),
            faculty: self.string(obj, "faculty", path),
            aps_requirement: self.number(obj, "apsRequirement", path),
            duration: self.duration(obj, path),
            description: self.string(obj, "description", path),
            subjects,
            career_prospects: self.strings(obj, "careerProspects", path),
            id,
        })
    }

    fn subject(&mut self, item: &Value, path: &str) -> Option<SubjectRequirement> {
        let Some(obj) = item.as_object() else {
            self.report(
                DiagnosticKind::CoercedField,
                path.to_string(),
                format!("expected a subject object, found {}; dropped", json_kind(item)),
            );
            return None;
        };
        Some(SubjectRequirement {
            name: self.string(obj, "name", path),
            level: self.number(obj, "level", path).unwrap_or(0),
            is_required: self.boolean(obj, "isRequired", path),
        })
    }

    fn application_period(&mut self, item: &Value, path: &str) -> Option<ApplicationPeriod> {
        let Some(obj) = item.as_object() else {
            self.report(
                DiagnosticKind::CoercedField,
                path.to_string(),
                format!("expected an application period, found {}; dropped", json_kind(item)),
            );
            return None;
        };
        Some(ApplicationPeriod {
            label: self.string(obj, "label", path),
            opens: self.string(obj, "opens", path),
            closes: self.string(obj, "closes", path),
            notes: self.optional_string(obj, "notes", path),
        })
    }

    fn contact_info(&mut self, obj: &Map<String, Value>, path: &str) -> Option<ContactInfo> {
        let value = Self::field(obj, "contactInfo")?;
        let Some(contact) = value.as_object() else {
            self.coerced(path, "contactInfo", "an object", value);
            return None;
        };
        let path = format!("{path}.contactInfo");
        Some(ContactInfo {
            phone: self.optional_string(contact, "phone", &path),
            email: self.optional_string(contact, "email", &path),
            address: self.optional_string(contact, "address", &path),
            website: self.optional_string(contact, "website", &path),
        })
    }

    /// Identity field: a non-blank string, or nothing.
    fn identity(obj: &Map<String, Value>, key: &str) -> Option<String> {
        Self::field(obj, key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    }

    fn string(&mut self, obj: &Map<String, Value>, key: &str, path: &str) -> String {
        self.optional_string(obj, key, path).unwrap_or_default()
    }

    fn optional_string(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Option<String> {
        let value = Self::field(obj, key)?;
        match value.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                self.coerced(path, key, "a string", value);
                None
            }
        }
    }

    /// Durations appear both as text ("3 years") and as a bare number of years.
    fn duration(&mut self, obj: &Map<String, Value>, path: &str) -> String {
        match Self::field(obj, "duration") {
            Some(Value::Number(n)) => format!("{n} years"),
            _ => self.string(obj, "duration", path),
        }
    }

    fn number<T: TryFrom<u64>>(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Option<T> {
        let value = Self::field(obj, key)?;
        match value.as_u64().and_then(|n| T::try_from(n).ok()) {
            Some(n) => Some(n),
            None => {
                self.coerced(path, key, "a non-negative integer", value);
                None
            }
        }
    }

    fn boolean(&mut self, obj: &Map<String, Value>, key: &str, path: &str) -> bool {
        let Some(value) = Self::field(obj, key) else {
            return false;
        };
        value.as_bool().unwrap_or_else(|| {
            self.coerced(path, key, "a boolean", value);
            false
        })
    }

    /// Array field; anything else becomes an empty list.
    fn list<'v>(&mut self, obj: &'v Map<String, Value>, key: &str, path: &str) -> &'v [Value] {
        match Self::field(obj, key) {
            None => &[],
            Some(Value::Array(items)) => items,
            Some(other) => {
                self.coerced(path, key, "an array", other);
                &[]
            }
        }
    }

    /// Array of strings; non-string elements are dropped.
    fn strings(&mut self, obj: &Map<String, Value>, key: &str, path: &str) -> Vec<String> {
        let items = self.list(obj, key, path);
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match item.as_str() {
                Some(s) => out.push(s.to_string()),
                None => self.coerced(path, &format!("{key}[{i}]"), "a string", item),
            }
        }
        out
    }
}
