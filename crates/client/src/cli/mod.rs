//! CLI command definitions.

pub mod posts;

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::DEFAULT_API_BASE_URL;

/// CLI client for the posts API.
#[derive(Debug, Parser)]
#[command(name = "prefetch-client")]
#[command(about = "CLI client for the posts API", long_about = None)]
pub struct Cli {
    /// Remote API base URL.
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read posts.
    Posts(posts::PostsCommand),
}
