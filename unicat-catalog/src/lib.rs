//! University catalog assembly.
//!
//! Turns raw JSON datasets into one merged, read-only [`Catalog`]:
//!
//! 1. [`ingest_source`] validates each dataset into typed records, skipping
//!    records without identity and reporting them as diagnostics.
//! 2. `unicat-merge` folds the datasets in precedence order.
//! 3. [`compute_statistics`] and the [`views`] functions derive exports.
//!
//! [`build_catalog`] runs the whole pipeline once; callers keep the result
//! and pass it to whatever needs it.

mod catalog;
mod config;
mod error;
mod metadata;
mod statistics;
mod validate;
pub mod views;

pub use catalog::{build_catalog, Catalog};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use metadata::{build_metadata, CatalogMetadata};
pub use statistics::{compute_statistics, log_statistics, CatalogStatistics};
pub use validate::{ingest_source, IngestedSource, RawSource};
pub use views::{DegreeMatch, ListingDefaults, ListingEntry};
