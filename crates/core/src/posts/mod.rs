mod error;
pub mod hooks;
mod traits;
mod types;

pub use error::{ApiError, Result};
pub use hooks::{fetch_post, fetch_posts, use_post, use_posts};
pub use traits::PostsApi;
pub use types::Post;
