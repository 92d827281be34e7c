//! Canonical records produced by the aggregator.

pub mod common;
pub mod content;
pub mod episode;
pub mod stream;

pub use common::{placeholder_id, SubOrDub, DEFAULT_EPISODE_DURATION, PLACEHOLDER_IMAGE};
pub use content::ContentItem;
pub use episode::EpisodeItem;
pub use stream::{StreamSource, PREFERRED_QUALITIES};
