//! Error types for the catalog presenter
//!
//! Presentation itself cannot fail; only loading configuration and
//! catalog snapshots from disk can.

use thiserror::Error;

/// Catalog presenter error types
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error while reading a snapshot or config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid presenter configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for catalog presenter operations
pub type CatalogResult<T> = Result<T, CatalogError>;
