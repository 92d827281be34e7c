//! Episode listings: the recent-episodes feed and per-anime episode lists.

use anitrack_core::EpisodeItem;
use tracing::info;

use crate::{
    client::{ContentAggregator, Transport},
    mock, parser,
    report::{Operation, Origin, Resolved},
    template::TemplateParams,
};

impl<T: Transport> ContentAggregator<T> {
    /// Latest released episodes.
    ///
    /// `kind` is the source's feed discriminator (e.g. 1 = sub, 2 = dub on
    /// Consumet). Falls back to a single placeholder episode.
    pub async fn get_recent_episodes(&self, page: u32, kind: u32) -> Vec<EpisodeItem> {
        self.get_recent_episodes_resolved(page, kind)
            .await
            .into_value()
    }

    /// [`Self::get_recent_episodes`] with its attempt report.
    pub async fn get_recent_episodes_resolved(
        &self,
        page: u32,
        kind: u32,
    ) -> Resolved<Vec<EpisodeItem>> {
        let params = TemplateParams::recent(page.max(1), kind);

        self.first_usable(Operation::RecentEpisodes, &params, |source_kind, payload| {
            parser::results_array(payload, source_kind).map(|items| {
                items
                    .iter()
                    .map(|item| parser::normalize_episode(item, None))
                    .collect::<Vec<_>>()
            })
        })
        .await
        .or_fallback(|| {
            info!(page, kind, "serving recent episodes from mock data");
            mock::recent_episodes()
        })
    }

    /// Episodes of one anime.
    ///
    /// Uses the episode list embedded in the anime's detail payload. If the
    /// lookup fails or the payload embeds no episodes, a single placeholder
    /// episode for `id` is returned.
    pub async fn get_episodes_for_content(&self, id: &str) -> Vec<EpisodeItem> {
        self.get_episodes_for_content_resolved(id)
            .await
            .into_value()
    }

    /// [`Self::get_episodes_for_content`] with its attempt report.
    pub async fn get_episodes_for_content_resolved(&self, id: &str) -> Resolved<Vec<EpisodeItem>> {
        let Resolved {
            value,
            origin,
            attempts,
        } = self.get_content_by_id_resolved(id).await;

        match value {
            Some(item) if !item.episodes.is_empty() => Resolved {
                value: item.episodes,
                origin,
                attempts,
            },
            _ => {
                info!(id, "no episode list available, serving placeholder");
                Resolved {
                    value: mock::episodes(id),
                    origin: Origin::Fallback,
                    attempts,
                }
            }
        }
    }
}
