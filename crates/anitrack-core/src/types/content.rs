//! Anime record.

use serde::{Deserialize, Serialize};

use super::{EpisodeItem, SubOrDub, PLACEHOLDER_IMAGE};

/// A single anime as seen by the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Source-scoped identifier. Never empty.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Cover image URL.
    pub image: String,
    /// Animation studio (if known).
    pub studio: Option<String>,
    /// Release year (if known).
    pub year: Option<i32>,
    /// Genres in source order.
    pub genres: Vec<String>,
    /// Plot summary.
    pub synopsis: String,
    /// ISO date (`YYYY-MM-DD`) or empty.
    pub release_date: String,
    /// "ongoing", "completed", "unknown" or a source-specific value.
    pub status: String,
    /// Number of episodes, 0 if unknown.
    pub total_episodes: u32,
    /// Numeric rating encoded as a string, "0" if unknown.
    pub rating: String,
    /// Popularity counter reported by the source.
    pub view_count: Option<u64>,
    /// Format such as "TV" or "Movie".
    #[serde(rename = "type")]
    pub content_type: String,
    pub sub_or_dub: SubOrDub,
    /// Source page URL.
    pub url: Option<String>,
    /// Episodes embedded in a detail payload.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<EpisodeItem>,
    /// True when `id` was generated locally because the source had none.
    #[serde(default)]
    pub synthetic_id: bool,
}

impl ContentItem {
    /// Create a record with every optional field at its default.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: PLACEHOLDER_IMAGE.to_string(),
            studio: None,
            year: None,
            genres: Vec::new(),
            synopsis: String::new(),
            release_date: String::new(),
            status: "unknown".to_string(),
            total_episodes: 0,
            rating: "0".to_string(),
            view_count: None,
            content_type: "TV".to_string(),
            sub_or_dub: SubOrDub::default(),
            url: None,
            episodes: Vec::new(),
            synthetic_id: false,
        }
    }

    /// Whether the title contains `query`, ignoring case.
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }

    /// Numeric rating, if the string parses.
    pub fn rating_value(&self) -> Option<f64> {
        self.rating.trim().parse().ok()
    }

    /// Whether the record is safe to hand to a persistence layer.
    pub const fn is_persistable(&self) -> bool {
        !self.synthetic_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_defaults() {
        let item = ContentItem::new("one-piece", "One Piece");
        assert_eq!(item.status, "unknown");
        assert_eq!(item.rating, "0");
        assert_eq!(item.total_episodes, 0);
        assert_eq!(item.sub_or_dub, SubOrDub::Sub);
        assert!(item.is_persistable());
    }

    #[test]
    fn test_title_matches_ignores_case() {
        let item = ContentItem::new("1", "One Piece");
        assert!(item.title_matches("piece"));
        assert!(item.title_matches("ONE"));
        assert!(!item.title_matches("zzz"));
    }

    #[test]
    fn test_serialized_field_names() {
        let mut item = ContentItem::new("1", "Frieren");
        item.release_date = "2023-09-29".to_string();
        let json = serde_json::to_value(&item).unwrap_or_default();
        assert_eq!(json["releaseDate"], "2023-09-29");
        assert_eq!(json["type"], "TV");
        assert_eq!(json["subOrDub"], "SUB");
        assert_eq!(json["totalEpisodes"], 0);
        assert!(json.get("episodes").is_none());
    }

    #[test]
    fn test_rating_value() {
        let mut item = ContentItem::new("1", "Title");
        item.rating = "8.71".to_string();
        assert_eq!(item.rating_value(), Some(8.71));
        item.rating = "n/a".to_string();
        assert_eq!(item.rating_value(), None);
    }
}
