use async_trait::async_trait;

use super::{Post, Result};

/// Read-only access to the remote posts source.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Gets every post.
    async fn get_posts(&self) -> Result<Vec<Post>>;

    /// Gets a single post by id.
    ///
    /// Returns [`ApiError::NotFound`](super::ApiError::NotFound) when the
    /// remote source does not answer successfully for a missing post.
    async fn get_post(&self, id: u64) -> Result<Post>;
}
