use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a non-fatal anomaly found while ingesting or merging sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A source array element that is not a JSON object.
    NotAnObject,
    /// A university without a usable `id`; the record was skipped.
    MissingUniversityId,
    /// A degree without a usable `id`; the degree was skipped.
    MissingDegreeId,
    /// An optional field had the wrong JSON type and was replaced by its default.
    CoercedField,
}

impl DiagnosticKind {
    /// True for kinds where a whole record was dropped.
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        !matches!(self, Self::CoercedField)
    }
}

/// A structured note about one record.
///
/// `source` names the dataset the record came from and `path` locates it
/// inside that dataset, e.g. `[3].faculties[0].degrees[2]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub source: String,
    pub path: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        source: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            source: source.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}: {}", self.source, self.path, self.message)
    }
}
