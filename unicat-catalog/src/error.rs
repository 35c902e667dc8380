//! Error types for catalog assembly.

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while assembling a catalog.
///
/// Sparse or partially invalid records never produce an error; they are
/// reported as diagnostics instead. Only input that cannot be a dataset at
/// all, or an unusable configuration, fails.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A dataset's top-level JSON value is not an array.
    #[error("source {name:?} must be a JSON array of universities, found {found}")]
    SourceNotArray { name: String, found: &'static str },

    /// Configuration could not be parsed or failed validation.
    #[error("config error: {0}")]
    Config(String),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
