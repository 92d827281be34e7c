//! Attempt reports describing how an operation was answered.

use std::fmt;

use anitrack_core::{Error, FailureKind};
use serde::Serialize;

/// Operation families a source can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Search,
    Trending,
    RecentEpisodes,
    Info,
    Watch,
}

impl Operation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Trending => "trending",
            Self::RecentEpisodes => "recent episodes",
            Self::Info => "info",
            Self::Watch => "watch",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of trying a single source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum AttemptOutcome {
    /// The source produced the returned data.
    Served,
    /// The source failed and the next one was tried.
    Failed { kind: FailureKind, reason: String },
}

/// One entry of the attempt log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceAttempt {
    pub source: String,
    #[serde(flatten)]
    pub outcome: AttemptOutcome,
}

impl SourceAttempt {
    pub(crate) fn served(source: &str) -> Self {
        Self {
            source: source.to_string(),
            outcome: AttemptOutcome::Served,
        }
    }

    pub(crate) fn failed(source: &str, error: &Error) -> Self {
        Self {
            source: source.to_string(),
            outcome: AttemptOutcome::Failed {
                kind: error.kind(),
                reason: error.to_string(),
            },
        }
    }

    pub const fn is_served(&self) -> bool {
        matches!(self.outcome, AttemptOutcome::Served)
    }

    /// Failure classification, if this attempt failed.
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match &self.outcome {
            AttemptOutcome::Served => None,
            AttemptOutcome::Failed { kind, .. } => Some(*kind),
        }
    }
}

/// Where the returned value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Origin {
    /// A live source, by position in the configured list.
    Source { index: usize, name: String },
    /// Built-in mock data after every source failed.
    Fallback,
    /// Every source failed and the operation has no mock data.
    Unavailable,
}

/// A value together with the record of how it was obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved<T> {
    pub value: T,
    pub origin: Origin,
    pub attempts: Vec<SourceAttempt>,
}

impl<T> Resolved<T> {
    pub fn into_value(self) -> T {
        self.value
    }

    /// Name of the source that served the value, if a live one did.
    pub fn served_by(&self) -> Option<&str> {
        match &self.origin {
            Origin::Source { name, .. } => Some(name),
            Origin::Fallback | Origin::Unavailable => None,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self.origin, Origin::Fallback)
    }
}

impl<T> Resolved<Option<T>> {
    /// Substitute mock data when no source produced a value.
    pub(crate) fn or_fallback(self, fallback: impl FnOnce() -> T) -> Resolved<T> {
        match self.value {
            Some(value) => Resolved {
                value,
                origin: self.origin,
                attempts: self.attempts,
            },
            None => Resolved {
                value: fallback(),
                origin: Origin::Fallback,
                attempts: self.attempts,
            },
        }
    }
}
