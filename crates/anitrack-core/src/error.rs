//! Error types for anitrack.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result type alias using anitrack's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for anitrack.
///
/// The aggregator never hands these to its callers; they describe why a
/// single source attempt failed and end up in the attempt report.
#[derive(Error, Debug)]
pub enum Error {
    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] HttpError),

    #[error("Network error: {0}")]
    Network(String),

    // Payload errors
    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Unexpected response shape: {0}")]
    Shape(String),

    #[error("Source does not support {0}")]
    Unsupported(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// HTTP-specific errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed with status {status}: {message}")]
    StatusError { status: u16, message: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Coarse classification of a failed source attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Connection refused, DNS failure, timeout.
    Transport,
    /// Non-2xx status or an unusable URL.
    Protocol,
    /// Body is not JSON or lacks the expected fields.
    Shape,
    /// The source has no endpoint for the requested operation.
    Unsupported,
    /// Bad configuration.
    Config,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transport => "transport",
            Self::Protocol => "protocol",
            Self::Shape => "shape",
            Self::Unsupported => "unsupported",
            Self::Config => "config",
        };
        f.write_str(name)
    }
}

impl Error {
    /// Classify this error for attempt reporting.
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Http(HttpError::StatusError { .. } | HttpError::InvalidUrl(_)) => {
                FailureKind::Protocol
            }
            Self::Http(HttpError::ConnectionFailed(_) | HttpError::Timeout)
            | Self::Network(_) => FailureKind::Transport,
            Self::Parse(_) | Self::Shape(_) => FailureKind::Shape,
            Self::Unsupported(_) => FailureKind::Unsupported,
            Self::Config(_) => FailureKind::Config,
        }
    }

    /// Returns true if this error came from a request that timed out.
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(HttpError::Timeout))
    }
}
