//! Episode record.

use serde::{Deserialize, Serialize};

use super::{SubOrDub, DEFAULT_EPISODE_DURATION, PLACEHOLDER_IMAGE};

/// A single episode of an anime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeItem {
    /// Source-scoped identifier. Never empty.
    pub id: String,
    /// Id of the anime this episode belongs to. A reference, not ownership.
    pub anime_id: String,
    /// Episode number, starting at 1.
    pub number: u32,
    pub title: String,
    pub thumbnail: String,
    /// Free-text running time such as "24 min".
    pub duration: String,
    pub release_date: String,
    /// Resolved lazily through stream resolution.
    pub streaming_url: Option<String>,
    pub download_url: Option<String>,
    pub sub_or_dub: SubOrDub,
    /// Source page URL, empty if unknown.
    pub url: String,
    /// True when `id` was generated locally because the source had none.
    #[serde(default)]
    pub synthetic_id: bool,
}

impl EpisodeItem {
    /// Create an episode with every optional field at its default.
    pub fn new(id: impl Into<String>, anime_id: impl Into<String>, number: u32) -> Self {
        let number = number.max(1);
        Self {
            id: id.into(),
            anime_id: anime_id.into(),
            number,
            title: Self::default_title(number),
            thumbnail: PLACEHOLDER_IMAGE.to_string(),
            duration: DEFAULT_EPISODE_DURATION.to_string(),
            release_date: String::new(),
            streaming_url: None,
            download_url: None,
            sub_or_dub: SubOrDub::default(),
            url: String::new(),
            synthetic_id: false,
        }
    }

    /// Id for episode `number` of `anime_id` when the source gives none.
    pub fn derived_id(anime_id: &str, number: u32) -> String {
        format!("{anime_id}-episode-{number}")
    }

    /// Title used when the source has none.
    pub fn default_title(number: u32) -> String {
        format!("Episode {number}")
    }

    pub const fn is_persistable(&self) -> bool {
        !self.synthetic_id
    }
}
