mod cli;
mod config;
mod dashboard;
mod error;
mod export;
mod graph;
mod layout;
mod server;
mod style;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing - only show warnings by default, use RUST_LOG=info for more detail
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let data = cli.data;

    match cli.command {
        Commands::Init { force } => {
            cli::commands::init::run(force).await?;
        }
        Commands::Serve { host, port } => {
            cli::commands::serve::run(host, port, data).await?;
        }
        Commands::Options { topics } => {
            cli::commands::options::run(topics, data).await?;
        }
        Commands::Layout { filter } => {
            cli::commands::layout::run(filter, data).await?;
        }
        Commands::Detail {
            node,
            topic_node,
            edge,
        } => {
            cli::commands::detail::run(node, topic_node, edge, data).await?;
        }
        Commands::Stats { top } => {
            cli::commands::stats::run(top, data).await?;
        }
        Commands::Export {
            format,
            output,
            filter,
        } => {
            cli::commands::export::run(format, output, filter, data).await?;
        }
    }

    Ok(())
}
