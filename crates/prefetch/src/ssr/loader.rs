use std::{collections::HashMap, future::Future};

use prefetch_core::query::QueryError;
use thiserror::Error;

use super::ServerSideProps;

/// Errors a page loader lets escape to the page handler.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to load page data: {0}")]
    Query(#[from] QueryError),
}

/// Request information available to a loader.
#[derive(Debug, Clone, Default)]
pub struct LoaderContext {
    /// Path the request was made to.
    pub path: String,
    /// Route parameters, by name.
    pub params: HashMap<String, String>,
}

impl LoaderContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Server-side data loader of a page.
pub trait PageLoader: Send + Sync {
    fn load(
        &self,
        ctx: &LoaderContext,
    ) -> impl Future<Output = Result<ServerSideProps, LoaderError>> + Send;
}
