use thiserror::Error;

use crate::posts::ApiError;

/// Errors that can occur during query cache operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] ApiError),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid query key: {0}")]
    InvalidKey(String),
}

impl QueryError {
    /// Returns true if the failed fetch reported a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::Fetch(e) if e.is_not_found())
    }
}

/// Result type for query cache operations.
pub type Result<T> = std::result::Result<T, QueryError>;
