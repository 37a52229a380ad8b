use std::{env, time::Duration};

use prefetch_client::DEFAULT_API_BASE_URL;
use prefetch_core::query::QueryOptions;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote posts API (default: jsonplaceholder)
    pub api_base_url: String,
    /// How long fetched query data stays fresh, in seconds (default: 0)
    pub stale_time_seconds: u64,
    /// Maximum number of queries per query client (default: 1,000)
    pub query_cache_max_entries: usize,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `API_BASE_URL` - Remote posts API (default: "https://jsonplaceholder.typicode.com")
    /// - `STALE_TIME_SECONDS` - Query freshness window (default: 0)
    /// - `QUERY_CACHE_MAX_ENTRIES` - Maximum cached queries (default: 1,000)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            stale_time_seconds: env::var("STALE_TIME_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            query_cache_max_entries: env::var("QUERY_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_000),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the query stale time as a Duration.
    pub fn stale_time(&self) -> Duration {
        Duration::from_secs(self.stale_time_seconds)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Options for every query client created by the server.
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            stale_time: self.stale_time(),
            max_entries: self.query_cache_max_entries,
        }
    }
}
