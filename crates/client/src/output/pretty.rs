//! Pretty output formatting.

use prefetch_core::posts::Post;

/// Format a post for display.
pub fn format_post(post: &Post) -> String {
    format!(
        "#{} {}\n  User: {}\n\n  {}",
        post.id,
        post.title,
        post.user_id,
        post.body.replace('\n', "\n  ")
    )
}

/// Format posts for display, one line each.
pub fn format_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts found.".to_string();
    }
    let mut output = format!("POSTS ({})\n", posts.len());
    output.push_str(&"-".repeat(40));
    for post in posts {
        output.push_str(&format!("\n{:>4}  {}", post.id, post.title));
    }
    output
}
