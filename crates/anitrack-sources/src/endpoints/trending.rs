//! Trending listing endpoint.

use anitrack_core::ContentItem;
use tracing::info;

use crate::{
    client::{ContentAggregator, Transport},
    mock, parser,
    report::{Operation, Resolved},
    template::TemplateParams,
};

impl<T: Transport> ContentAggregator<T> {
    /// Currently trending anime. Falls back to the full mock catalog.
    pub async fn get_trending_content(&self, page: u32) -> Vec<ContentItem> {
        self.get_trending_content_resolved(page).await.into_value()
    }

    /// [`Self::get_trending_content`] with its attempt report.
    pub async fn get_trending_content_resolved(&self, page: u32) -> Resolved<Vec<ContentItem>> {
        let params = TemplateParams::page(page.max(1));

        self.first_usable(Operation::Trending, &params, |kind, payload| {
            parser::results_array(payload, kind).map(|items| {
                items
                    .iter()
                    .map(parser::normalize_content)
                    .collect::<Vec<_>>()
            })
        })
        .await
        .or_fallback(|| {
            info!(page, "serving trending from mock catalog");
            mock::catalog()
        })
    }
}
