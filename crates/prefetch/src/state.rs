//! Application state shared by all request handlers.

use std::{sync::Arc, time::Duration};

use prefetch_client::PostsClient;
use prefetch_core::{posts::PostsApi, query::QueryOptions};

use crate::{
    config::Config,
    ssr::{with_navigation_csr, NavigationCsr, PostLoader, PostsLoader},
};

/// Shared application state.
///
/// Holds the posts source, the query options used for every query client
/// and the guarded server loader of each data-backed page.
#[derive(Clone)]
pub struct AppState {
    /// Remote posts source.
    pub api: Arc<dyn PostsApi>,
    /// Options for query clients created while serving a request.
    pub query_options: QueryOptions,
    /// Loader for `/posts`.
    pub posts_loader: Arc<NavigationCsr<PostsLoader>>,
    /// Loader for `/posts/{id}`.
    pub post_loader: Arc<NavigationCsr<PostLoader>>,
    /// Requests taking longer than this are answered with 408.
    pub request_timeout: Duration,
}

/// Request timeout used unless configured otherwise.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

impl AppState {
    /// Creates state backed by the given posts source.
    pub fn new(api: Arc<dyn PostsApi>, query_options: QueryOptions) -> Self {
        Self {
            posts_loader: Arc::new(with_navigation_csr(PostsLoader::new(
                api.clone(),
                query_options,
            ))),
            post_loader: Arc::new(with_navigation_csr(PostLoader::new(
                api.clone(),
                query_options,
            ))),
            api,
            query_options,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Creates state talking to the remote API named in `config`.
    pub fn from_config(config: &Config) -> Self {
        let client = PostsClient::new(config.api_base_url.clone());
        Self::new(Arc::new(client), config.query_options())
            .with_request_timeout(config.request_timeout())
    }
}
