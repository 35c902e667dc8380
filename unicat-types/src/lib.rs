//! Core type definitions for the university catalog engine.
//!
//! This crate defines the record shapes every other crate works with:
//! - [`University`], [`Faculty`] and [`Degree`] — the nested catalog records
//! - [`UniversityType`] — the known institution categories
//! - [`Diagnostic`] — a non-fatal note about a record that was skipped or coerced
//!
//! The records carry no behavior beyond small accessors. Merging, validation
//! and aggregation live in `unicat-merge` and `unicat-catalog`.

mod diagnostic;
mod kind;
mod record;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use kind::UniversityType;
pub use record::{ApplicationPeriod, ContactInfo, Degree, Faculty, SubjectRequirement, University};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown university type: {0:?}")]
    UnknownUniversityType(String),
}
