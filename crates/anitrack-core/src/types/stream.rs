//! Stream descriptors and quality selection.

use serde::{Deserialize, Serialize};

/// Quality tags in order of preference. Anything else is a last resort.
pub const PREFERRED_QUALITIES: &[&str] = &["1080p", "720p"];

/// A playable stream offered by a source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreamSource {
    /// Playable URL. Never empty.
    pub url: String,
    /// Free-form quality tag such as "1080p" or "default".
    pub quality: Option<String>,
    /// Whether the URL points at an HLS playlist.
    #[serde(default)]
    pub is_m3u8: bool,
}

impl StreamSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            quality: None,
            is_m3u8: false,
        }
    }

    #[must_use]
    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    fn has_quality(&self, tag: &str) -> bool {
        self.quality
            .as_deref()
            .is_some_and(|q| q.trim().eq_ignore_ascii_case(tag))
    }

    /// Pick the preferred stream: the first "1080p", else the first
    /// "720p", else the first stream in the list.
    ///
    /// This walks a fixed preference list rather than sorting by resolution,
    /// so an unknown tag such as "4k" never wins over a known one.
    pub fn select_preferred(sources: &[Self]) -> Option<&Self> {
        PREFERRED_QUALITIES
            .iter()
            .find_map(|tag| sources.iter().find(|s| s.has_quality(tag)))
            .or_else(|| sources.first())
    }
}
