//! # anitrack
//!
//! Command-line front end for the content aggregator. Prints results as
//! JSON on stdout; logs go to stderr.

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::Cli;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anitrack=info,anitrack_sources=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let aggregator = anitrack_sources::ContentAggregator::from_env()
        .context("failed to configure content sources")?;
    info!(
        "Starting anitrack v{} with {} source(s)",
        env!("CARGO_PKG_VERSION"),
        aggregator.config().enabled_sources().count()
    );

    let output = commands::run(&aggregator, cli).await?;
    println!("{output}");
    Ok(())
}
