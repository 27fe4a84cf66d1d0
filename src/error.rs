//! Error types for page-metadata.
//!
//! Only URL handling can fail. Everything else in the pipeline degrades to
//! empty fields.

/// Error type for metadata parsing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page URL has no `scheme://host` structure, so `source` cannot be derived.
    #[error("Invalid page URL: {0:?}")]
    InvalidUrl(String),

    /// Serializing a metadata record to JSON failed.
    #[error("Metadata serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for metadata parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
