//! # anitrack-sources
//!
//! Content aggregator for anitrack.
//!
//! Anime, episode and stream data is pulled from an ordered list of
//! third-party sources. Each source is tried in turn with a bounded request,
//! the first usable answer is normalized into the canonical records of
//! `anitrack-core`, and built-in mock data takes over when every source
//! fails. No operation returns an error to its caller.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod mock;
pub mod parser;
pub mod report;
pub mod template;

pub use client::{ContentAggregator, HttpTransport, Transport};
pub use config::{AggregatorConfig, EndpointTemplates, SourceEndpoint, SourceKind};
pub use report::{AttemptOutcome, Operation, Origin, Resolved, SourceAttempt};
