//! Client error types.

use prefetch_core::posts::ApiError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound { resource } => ApiError::NotFound { resource },
            ClientError::ServerError { status, message } => ApiError::Remote { status, message },
            // reqwest reports body decoding failures as request errors.
            ClientError::Request(e) if e.is_decode() => ApiError::InvalidResponse(e.to_string()),
            ClientError::Request(e) => ApiError::Request(e.to_string()),
            ClientError::InvalidResponse(msg) => ApiError::InvalidResponse(msg),
            ClientError::Json(e) => ApiError::InvalidResponse(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_api_not_found() {
        let err = ClientError::NotFound {
            resource: "post 7".to_string(),
        };
        assert_eq!(
            ApiError::from(err),
            ApiError::NotFound {
                resource: "post 7".to_string()
            }
        );
    }

    #[test]
    fn test_server_error_maps_to_remote() {
        let err = ClientError::ServerError {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(
            ApiError::from(err),
            ApiError::Remote {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_json_error_maps_to_invalid_response() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        assert!(matches!(
            ApiError::from(ClientError::from(json_err)),
            ApiError::InvalidResponse(_)
        ));
    }
}
