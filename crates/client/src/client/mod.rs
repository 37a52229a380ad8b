//! HTTP client for the posts API.

pub mod posts;

use crate::error::{ClientError, Result};

/// Public demo API serving the post records.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// HTTP client for the posts API.
#[derive(Debug, Clone)]
pub struct PostsClient {
    client: reqwest::Client,
    base_url: String,
}

impl PostsClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    ///
    /// Any non-success status is an error; 404 becomes `NotFound`.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: impl Into<String>,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound {
                resource: resource.into(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
