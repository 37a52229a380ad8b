use thiserror::Error;

/// Errors returned by a [`PostsApi`](super::PostsApi) implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },
    #[error("Remote returned {status}: {message}")]
    Remote { status: u16, message: String },
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Returns true if the remote source reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

/// Result type for posts API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
