//! Server loaders of the posts pages.

use std::sync::Arc;

use prefetch_core::{
    posts::{fetch_post, fetch_posts, PostsApi},
    query::{QueryClient, QueryKey, QueryOptions},
};

use super::{LoaderContext, LoaderError, PageLoader, PageProps, ServerSideProps};

/// Prefetches the post list for `/posts`.
#[derive(Clone)]
pub struct PostsLoader {
    api: Arc<dyn PostsApi>,
    options: QueryOptions,
}

impl PostsLoader {
    pub fn new(api: Arc<dyn PostsApi>, options: QueryOptions) -> Self {
        Self { api, options }
    }
}

impl PageLoader for PostsLoader {
    async fn load(&self, _ctx: &LoaderContext) -> Result<ServerSideProps, LoaderError> {
        let client = QueryClient::new(self.options);
        fetch_posts(&client, self.api.as_ref()).await?;

        Ok(ServerSideProps::Props(PageProps::dehydrated(
            client.dehydrate().await,
        )))
    }
}

/// Prefetches a single post for `/posts/{id}`.
///
/// A failed fetch leaves the query absent and yields `NotFound`.
#[derive(Clone)]
pub struct PostLoader {
    api: Arc<dyn PostsApi>,
    options: QueryOptions,
}

impl PostLoader {
    pub fn new(api: Arc<dyn PostsApi>, options: QueryOptions) -> Self {
        Self { api, options }
    }
}

impl PageLoader for PostLoader {
    async fn load(&self, ctx: &LoaderContext) -> Result<ServerSideProps, LoaderError> {
        let Some(id) = ctx.param("id").and_then(|id| id.parse::<u64>().ok()) else {
            tracing::debug!(path = %ctx.path, "post id is not numeric");
            return Ok(ServerSideProps::NotFound);
        };

        let client = QueryClient::new(self.options);
        let mut is_error = false;
        if let Err(e) = fetch_post(&client, self.api.as_ref(), id).await {
            tracing::warn!(post_id = id, error = %e, "failed to prefetch post");
            is_error = true;
        }

        let has_data = client.get_query_state(&QueryKey::Post(id)).await.data().is_some();
        if is_error && !has_data {
            return Ok(ServerSideProps::NotFound);
        }

        Ok(ServerSideProps::Props(PageProps::dehydrated(
            client.dehydrate().await,
        )))
    }
}
