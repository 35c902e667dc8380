use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::views::ListingDefaults;

/// Settings for catalog assembly and its exports.
///
/// Every key is optional in TOML; missing keys take the [`Default`] values.
///
/// ```toml
/// version = "2.1.0"
/// source_tag = "core+supplement+programs"
/// default_logo = "/images/universities/default-logo.png"
/// abbreviation_length = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Version string reported in the metadata export.
    pub version: String,
    /// Provenance tag reported in the metadata export.
    pub source_tag: String,
    /// Logo path used by the listing when a university has none.
    pub default_logo: String,
    /// Characters of the name used when a university has no abbreviation.
    pub abbreviation_length: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            source_tag: "merged-sources".to_string(),
            default_logo: "/images/universities/default-logo.png".to_string(),
            abbreviation_length: 3,
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> CatalogResult<Self> {
        let config: CatalogConfig =
            toml::from_str(input).map_err(|e| CatalogError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if self.version.trim().is_empty() {
            return Err(CatalogError::Config("version must not be empty".into()));
        }
        if self.abbreviation_length == 0 {
            return Err(CatalogError::Config(
                "abbreviation_length must be at least 1".into(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn listing_defaults(&self) -> ListingDefaults {
        ListingDefaults {
            logo: self.default_logo.clone(),
            abbreviation_length: self.abbreviation_length,
        }
    }
}
