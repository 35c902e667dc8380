use serde::{Deserialize, Serialize};

use crate::UniversityType;

/// A university as described by one source, or by the merged catalog.
///
/// Only `id` is required. Every other field defaults to empty when absent
/// from the input, so sparse records deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct University {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub full_name: String,
    #[serde(rename = "type")]
    pub university_type: String,
    pub description: String,
    pub location: String,
    pub province: String,
    pub website: String,
    pub logo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub established: Option<u32>,
    #[serde(alias = "studentCount", skip_serializing_if = "Option::is_none")]
    pub student_population: Option<u64>,
    pub campuses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
    pub application_periods: Vec<ApplicationPeriod>,
    pub notable_features: Vec<String>,
    pub faculties: Vec<Faculty>,
}

impl University {
    /// A bare university with an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style setter for the institution category.
    #[must_use]
    pub fn with_type(mut self, kind: UniversityType) -> Self {
        self.university_type = kind.as_str().to_string();
        self
    }

    /// Builder-style setter that appends a faculty.
    #[must_use]
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculties.push(faculty);
        self
    }

    /// The parsed category, if the stored string is one of the known ones.
    #[must_use]
    pub fn kind(&self) -> Option<UniversityType> {
        UniversityType::parse(&self.university_type)
    }

    /// Number of degree programs across all faculties.
    #[must_use]
    pub fn program_count(&self) -> usize {
        self.faculties.iter().map(|f| f.degrees.len()).sum()
    }
}

/// A named group of degree programs inside one university.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Faculty {
    pub name: String,
    pub description: String,
    pub degrees: Vec<Degree>,
}

impl Faculty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_degree(mut self, degree: Degree) -> Self {
        self.degrees.push(degree);
        self
    }

    /// Degree ids in stored order.
    pub fn degree_ids(&self) -> impl Iterator<Item = &str> {
        self.degrees.iter().map(|d| d.id.as_str())
    }
}

/// A single degree program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Degree {
    pub id: String,
    pub name: String,
    pub faculty: String,
    /// Minimum Admission Point Score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aps_requirement: Option<u32>,
    pub duration: String,
    pub description: String,
    pub subjects: Vec<SubjectRequirement>,
    pub career_prospects: Vec<String>,
}

impl Degree {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_aps(mut self, aps: u32) -> Self {
        self.aps_requirement = Some(aps);
        self
    }
}

/// A school subject a degree asks for, with the minimum achievement level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubjectRequirement {
    pub name: String,
    pub level: u8,
    pub is_required: bool,
}

/// Contact channels; an instance with every channel blank counts as absent when merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl ContactInfo {
    /// True when no contact channel carries a non-empty value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.phone, &self.email, &self.address, &self.website]
            .into_iter()
            .all(|v| v.as_deref().is_none_or(str::is_empty))
    }
}

/// An application window, e.g. undergraduate intake.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationPeriod {
    pub label: String,
    pub opens: String,
    pub closes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
