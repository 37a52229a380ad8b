//! Test doubles shared by the server tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use prefetch_core::posts::{ApiError, Post, PostsApi, Result};

/// In-memory posts source that counts remote calls.
pub struct MockPostsApi {
    posts: Vec<Post>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockPostsApi {
    /// A source serving posts `1..=count`.
    pub fn with_posts(count: u64) -> Self {
        Self {
            posts: (1..=count)
                .map(|id| Post::new(id, format!("Title {id}"), format!("Body of post {id}")))
                .collect(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// A source whose every call fails with a server error.
    pub fn failing() -> Self {
        Self {
            posts: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn server_error() -> ApiError {
        ApiError::Remote {
            status: 500,
            message: "upstream unavailable".to_string(),
        }
    }
}

#[async_trait]
impl PostsApi for MockPostsApi {
    async fn get_posts(&self) -> Result<Vec<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::server_error());
        }
        Ok(self.posts.clone())
    }

    async fn get_post(&self, id: u64) -> Result<Post> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::server_error());
        }
        self.posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                resource: format!("post {id}"),
            })
    }
}
