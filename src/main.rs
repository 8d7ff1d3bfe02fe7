//! refgraph CLI entry point

use clap::Parser;
use refgraph::cli::Cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for results
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("REFGRAPH_LOG"))
        .init();

    let cli = Cli::parse();
    refgraph::cli::run(cli).await
}
