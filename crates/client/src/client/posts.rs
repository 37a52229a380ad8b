//! Post API operations.

use async_trait::async_trait;
use prefetch_core::posts::{self, Post, PostsApi};

use super::PostsClient;
use crate::error::Result;

impl PostsClient {
    /// List all posts.
    pub async fn get_posts(&self) -> Result<Vec<Post>> {
        let response = self.client.get(self.url("/posts")).send().await?;
        self.handle_response(response, "posts").await
    }

    /// Get post by ID.
    pub async fn get_post(&self, id: u64) -> Result<Post> {
        let response = self
            .client
            .get(self.url(&format!("/posts/{}", id)))
            .send()
            .await?;
        self.handle_response(response, format!("post {id}")).await
    }
}

#[async_trait]
impl PostsApi for PostsClient {
    async fn get_posts(&self) -> posts::Result<Vec<Post>> {
        PostsClient::get_posts(self).await.map_err(Into::into)
    }

    async fn get_post(&self, id: u64) -> posts::Result<Post> {
        PostsClient::get_post(self, id).await.map_err(Into::into)
    }
}
