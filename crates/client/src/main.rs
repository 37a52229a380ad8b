//! prefetch-client CLI entry point.

use clap::Parser;
use prefetch_client::cli::{posts::PostsAction, Cli, Commands};
use prefetch_client::output::{render_post, render_posts};
use prefetch_client::PostsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = PostsClient::new(&cli.base_url);

    match cli.command {
        Commands::Posts(posts_cmd) => match posts_cmd.action {
            PostsAction::List => {
                let posts = client.get_posts().await?;
                println!("{}", render_posts(&posts, cli.format));
            }
            PostsAction::Get { id } => {
                let post = client.get_post(id).await?;
                println!("{}", render_post(&post, cli.format));
            }
        },
    }

    Ok(())
}
