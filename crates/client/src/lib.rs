//! prefetch_client - data-access functions for the posts API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::{PostsClient, DEFAULT_API_BASE_URL};
pub use error::{ClientError, Result};
