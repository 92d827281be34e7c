//! Stream link resolution.

use anitrack_core::{Error, StreamSource};

use crate::{
    client::{ContentAggregator, Transport},
    parser,
    report::{Operation, Resolved},
    template::TemplateParams,
};

impl<T: Transport> ContentAggregator<T> {
    /// Playable URL for an episode, preferring 1080p, then 720p, then the
    /// first stream offered.
    ///
    /// `None` means the stream is unavailable; there is no mock fallback.
    pub async fn resolve_stream_url(&self, episode_id: &str) -> Option<String> {
        self.resolve_stream(episode_id).await.map(|s| s.url)
    }

    /// The preferred stream descriptor for an episode.
    pub async fn resolve_stream(&self, episode_id: &str) -> Option<StreamSource> {
        self.resolve_stream_resolved(episode_id).await.into_value()
    }

    /// [`Self::resolve_stream`] with its attempt report.
    pub async fn resolve_stream_resolved(
        &self,
        episode_id: &str,
    ) -> Resolved<Option<StreamSource>> {
        self.first_usable(
            Operation::Watch,
            &TemplateParams::id(episode_id),
            |kind, payload| {
                let sources = parser::stream_sources(payload, kind)?;
                StreamSource::select_preferred(&sources)
                    .cloned()
                    .ok_or_else(|| Error::Shape("no stream sources".into()))
            },
        )
        .await
    }
}
