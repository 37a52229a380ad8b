//! Posts CLI commands.

use clap::{Parser, Subcommand};

/// Post read commands.
#[derive(Debug, Parser)]
pub struct PostsCommand {
    #[command(subcommand)]
    pub action: PostsAction,
}

/// Available post actions.
#[derive(Debug, Subcommand)]
pub enum PostsAction {
    /// List all posts.
    List,
    /// Get post by ID.
    Get {
        /// Post ID.
        id: u64,
    },
}
