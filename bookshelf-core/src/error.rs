//! Error types for Bookshelf Core

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all Bookshelf operations
#[derive(Debug, Error)]
pub enum ShelfError {
    /// A required book field was not supplied
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A year that cannot be turned into a calendar date
    #[error("Year out of range: {0}")]
    InvalidYear(i32),

    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
