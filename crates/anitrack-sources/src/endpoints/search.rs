//! Search endpoint.

use anitrack_core::ContentItem;
use tracing::info;

use crate::{
    client::{ContentAggregator, Transport},
    mock, parser,
    report::{Operation, Resolved},
    template::TemplateParams,
};

impl<T: Transport> ContentAggregator<T> {
    /// Search anime by title.
    ///
    /// When every source fails, the mock catalog filtered by a
    /// case-insensitive title match is returned instead (possibly empty).
    pub async fn search_content(&self, query: &str, page: u32) -> Vec<ContentItem> {
        self.search_content_resolved(query, page).await.into_value()
    }

    /// [`Self::search_content`] with its attempt report.
    pub async fn search_content_resolved(
        &self,
        query: &str,
        page: u32,
    ) -> Resolved<Vec<ContentItem>> {
        let params = TemplateParams::search(query, page.max(1));

        self.first_usable(Operation::Search, &params, |kind, payload| {
            parser::results_array(payload, kind).map(|items| {
                items
                    .iter()
                    .map(parser::normalize_content)
                    .collect::<Vec<_>>()
            })
        })
        .await
        .or_fallback(|| {
            info!(query, "serving search from mock catalog");
            mock::search(query)
        })
    }
}
