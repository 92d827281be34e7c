//! Public operations of the aggregator, one module per endpoint family.
//!
//! Each operation has a plain form returning data and a `*_resolved` form
//! that also reports which source answered and how the others failed.

pub mod episodes;
pub mod info;
pub mod search;
pub mod trending;
pub mod watch;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::client::tests::{aggregator, Reply, ScriptedTransport};

    fn all_hanging() -> ScriptedTransport {
        ScriptedTransport::new()
            .reply("a", Reply::Hang)
            .reply("b", Reply::Hang)
            .reply("c", Reply::Hang)
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_operation_degrades_when_all_sources_hang() {
        let agg = aggregator(all_hanging());
        let started = tokio::time::Instant::now();

        assert_eq!(agg.search_content("piece", 1).await.len(), 1);
        assert!(!agg.get_trending_content(1).await.is_empty());
        assert_eq!(agg.get_recent_episodes(1, 1).await.len(), 1);
        assert!(agg.get_content_by_id("one-piece").await.is_none());
        assert_eq!(agg.get_episodes_for_content("one-piece").await.len(), 1);
        assert!(agg.resolve_stream_url("one-piece-episode-1").await.is_none());

        // six operations, three sources each, one timeout per attempt
        let bound = agg.config().timeout * 18;
        assert!(started.elapsed() >= bound);
        assert!(started.elapsed() < bound + Duration::from_secs(1));
    }
}
