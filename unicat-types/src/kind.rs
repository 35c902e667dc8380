use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Institution category of a university.
///
/// Records store the category as a plain string so that unknown values pass
/// through the merge untouched. This enum names the four categories the
/// catalog exports views for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniversityType {
    #[serde(rename = "Traditional University")]
    Traditional,
    #[serde(rename = "University of Technology")]
    Technology,
    #[serde(rename = "Comprehensive University")]
    Comprehensive,
    #[serde(rename = "Specialized University")]
    Specialized,
}

impl UniversityType {
    /// Every known category, in export order.
    pub const ALL: [UniversityType; 4] = [
        UniversityType::Traditional,
        UniversityType::Technology,
        UniversityType::Comprehensive,
        UniversityType::Specialized,
    ];

    /// The display string used in records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Traditional => "Traditional University",
            Self::Technology => "University of Technology",
            Self::Comprehensive => "Comprehensive University",
            Self::Specialized => "Specialized University",
        }
    }

    /// Exact match against the display strings. Returns `None` for anything else.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

impl fmt::Display for UniversityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UniversityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::UnknownUniversityType(s.to_string()))
    }
}
