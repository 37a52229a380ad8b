//! Query hooks binding the posts API to cache keys.
//!
//! `use_*` functions are what a page calls to read data: they serve warm
//! cache entries as-is and only hit the API when nothing is cached.
//! `fetch_*` functions are what server loaders call to populate a cache.

use crate::query::{self, QueryClient, QueryKey, QueryResult};

use super::{Post, PostsApi};

/// Reads the post list under `["posts"]`.
pub async fn use_posts(client: &QueryClient, api: &dyn PostsApi) -> QueryResult<Vec<Post>> {
    client.use_query(QueryKey::Posts, || api.get_posts()).await
}

/// Reads a single post under `["post", id]`.
pub async fn use_post(client: &QueryClient, api: &dyn PostsApi, id: u64) -> QueryResult<Post> {
    client.use_query(QueryKey::Post(id), || api.get_post(id)).await
}

/// Populates `["posts"]`.
pub async fn fetch_posts(client: &QueryClient, api: &dyn PostsApi) -> query::Result<Vec<Post>> {
    client.fetch_query(QueryKey::Posts, || api.get_posts()).await
}

/// Populates `["post", id]`.
pub async fn fetch_post(client: &QueryClient, api: &dyn PostsApi, id: u64) -> query::Result<Post> {
    client.fetch_query(QueryKey::Post(id), || api.get_post(id)).await
}
