//! Common types shared across the records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Image used when a source provides no artwork.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x400?text=No+Image";

/// Duration shown when a source does not report one.
pub const DEFAULT_EPISODE_DURATION: &str = "24 min";

/// Prefix of generated identifiers.
const PLACEHOLDER_PREFIX: &str = "tmp-";

/// Generate a random identifier for a record whose source omitted one.
///
/// These ids differ on every call. Records carrying one have
/// `synthetic_id` set and must not be persisted.
pub fn placeholder_id() -> String {
    format!("{PLACEHOLDER_PREFIX}{}", uuid::Uuid::new_v4().simple())
}

/// Audio track of an anime or episode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubOrDub {
    /// Original audio with subtitles.
    #[default]
    Sub,
    /// Dubbed audio.
    Dub,
}

impl SubOrDub {
    /// Parse a free-form upstream tag. Anything that is not "dub" is SUB.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("dub") {
            Self::Dub
        } else {
            Self::Sub
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sub => "SUB",
            Self::Dub => "DUB",
        }
    }
}

impl fmt::Display for SubOrDub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
