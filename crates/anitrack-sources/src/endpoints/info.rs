//! Detail lookup by id.

use anitrack_core::{ContentItem, EpisodeItem};

use crate::{
    client::{ContentAggregator, Transport},
    parser,
    report::{Operation, Resolved},
    template::TemplateParams,
};

impl<T: Transport> ContentAggregator<T> {
    /// Look up a single anime.
    ///
    /// Returns `None` when no source knows it. There is no mock substitute
    /// for lookups by id.
    pub async fn get_content_by_id(&self, id: &str) -> Option<ContentItem> {
        self.get_content_by_id_resolved(id).await.into_value()
    }

    /// [`Self::get_content_by_id`] with its attempt report.
    pub async fn get_content_by_id_resolved(&self, id: &str) -> Resolved<Option<ContentItem>> {
        self.first_usable(Operation::Info, &TemplateParams::id(id), |kind, payload| {
            parser::detail_object(payload, kind)
                .map(parser::normalize_content)
                .map(|item| adopt_requested_id(item, id))
        })
        .await
    }
}

/// A detail payload without an id belongs to the id it was fetched by.
fn adopt_requested_id(mut item: ContentItem, id: &str) -> ContentItem {
    if item.synthetic_id && !id.trim().is_empty() {
        let placeholder = std::mem::replace(&mut item.id, id.to_string());
        item.synthetic_id = false;
        for episode in &mut item.episodes {
            if episode.id == EpisodeItem::derived_id(&placeholder, episode.number) {
                episode.id = EpisodeItem::derived_id(id, episode.number);
                episode.synthetic_id = false;
            }
            episode.anime_id = item.id.clone();
        }
    }
    item
}
