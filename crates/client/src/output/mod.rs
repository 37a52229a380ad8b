//! Rendering of command results in the selected output format.

pub mod json;
pub mod pretty;

use prefetch_core::posts::Post;

use crate::cli::OutputFormat;

/// Render a post list.
pub fn render_posts(posts: &[Post], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(&posts),
        OutputFormat::Pretty => pretty::format_posts(posts),
    }
}

/// Render a single post.
pub fn render_post(post: &Post, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(post),
        OutputFormat::Pretty => pretty::format_post(post),
    }
}
