//! Command definitions and dispatch.

use anitrack_core::{ContentItem, EpisodeItem};
use anitrack_sources::{ContentAggregator, Resolved, Transport};
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "anitrack", version, about = "Query anime catalog sources")]
pub struct Cli {
    /// Print which source answered and how the others failed.
    #[arg(long, global = true)]
    pub report: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search anime by title.
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List trending anime.
    Trending {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List recently released episodes.
    Recent {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Source feed discriminator (1 = sub, 2 = dub on Consumet).
        #[arg(long, default_value_t = 1)]
        kind: u32,
    },
    /// Show a single anime.
    Info { id: String },
    /// List the episodes of an anime.
    Episodes { id: String },
    /// Resolve a playable stream URL for an episode.
    Stream { episode_id: String },
}

/// Run `cli` against `aggregator` and render the result as JSON.
pub async fn run<T: Transport>(aggregator: &ContentAggregator<T>, cli: Cli) -> Result<String> {
    let report = cli.report;
    match cli.command {
        Command::Search { query, page } => {
            let resolved = aggregator.search_content_resolved(&query, page).await;
            note_generated_ids(resolved.value.iter().map(ContentItem::is_persistable));
            render(resolved, report)
        }
        Command::Trending { page } => {
            let resolved = aggregator.get_trending_content_resolved(page).await;
            note_generated_ids(resolved.value.iter().map(ContentItem::is_persistable));
            render(resolved, report)
        }
        Command::Recent { page, kind } => {
            let resolved = aggregator.get_recent_episodes_resolved(page, kind).await;
            note_generated_ids(resolved.value.iter().map(EpisodeItem::is_persistable));
            render(resolved, report)
        }
        Command::Info { id } => {
            let resolved = aggregator.get_content_by_id_resolved(&id).await;
            note_generated_ids(resolved.value.iter().map(ContentItem::is_persistable));
            render(resolved, report)
        }
        Command::Episodes { id } => {
            let resolved = aggregator.get_episodes_for_content_resolved(&id).await;
            note_generated_ids(resolved.value.iter().map(EpisodeItem::is_persistable));
            render(resolved, report)
        }
        Command::Stream { episode_id } => {
            let resolved = aggregator.resolve_stream_resolved(&episode_id).await;
            if resolved.value.is_none() {
                eprintln!("stream unavailable for {episode_id}");
            }
            render(resolved, report)
        }
    }
}

/// Count records whose ids were generated locally and warn about them.
fn note_generated_ids(persistable: impl Iterator<Item = bool>) -> usize {
    let generated = persistable.filter(|ok| !ok).count();
    if generated > 0 {
        eprintln!("{generated} record(s) carry generated ids and should not be stored");
    }
    generated
}

fn render<T: Serialize>(resolved: Resolved<T>, report: bool) -> Result<String> {
    if resolved.is_fallback() {
        eprintln!("all sources failed, showing limited built-in data");
    }
    let json = if report {
        serde_json::to_string_pretty(&resolved)?
    } else {
        serde_json::to_string_pretty(&resolved.value)?
    };
    Ok(json)
}
