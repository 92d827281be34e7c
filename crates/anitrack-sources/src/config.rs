//! Source configuration for the aggregator.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use anitrack_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::report::Operation;

/// Default bound on a single source request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Inline JSON array of [`SourceEndpoint`]s.
pub const ENV_SOURCES: &str = "ANITRACK_SOURCES";
/// Path to a JSON file holding an array of [`SourceEndpoint`]s.
pub const ENV_SOURCES_FILE: &str = "ANITRACK_SOURCES_FILE";
/// Per-request timeout in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "ANITRACK_TIMEOUT_MS";
/// User-Agent header sent with every request.
pub const ENV_USER_AGENT: &str = "ANITRACK_USER_AGENT";

/// Family of upstream API a source belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Consumet-style scraping API (`{"results": [...]}`).
    #[default]
    Consumet,
    /// Jikan / `MyAnimeList` REST API (`{"data": [...]}`).
    Jikan,
    /// Anything else.
    Generic,
}

impl SourceKind {
    /// Keys that may wrap the useful part of a payload, most likely first.
    pub const fn envelope_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Jikan => &["data", "results"],
            Self::Consumet | Self::Generic => &["results", "data"],
        }
    }
}

/// URL templates for each operation family a source supports.
///
/// Placeholders: `{base}`, `{query}`, `{page}`, `{id}`, `{kind}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointTemplates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_episodes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch: Option<String>,
}

impl EndpointTemplates {
    /// Template for `operation`, if this source supports it.
    pub fn for_operation(&self, operation: Operation) -> Option<&str> {
        match operation {
            Operation::Search => self.search.as_deref(),
            Operation::Trending => self.trending.as_deref(),
            Operation::RecentEpisodes => self.recent_episodes.as_deref(),
            Operation::Info => self.info.as_deref(),
            Operation::Watch => self.watch.as_deref(),
        }
    }

    /// Consumet-style routes under `{base}/anime/gogoanime`.
    pub fn consumet() -> Self {
        Self {
            search: Some("{base}/anime/gogoanime/{query}?page={page}".to_string()),
            trending: Some("{base}/anime/gogoanime/top-airing?page={page}".to_string()),
            recent_episodes: Some(
                "{base}/anime/gogoanime/recent-episodes?page={page}&type={kind}".to_string(),
            ),
            info: Some("{base}/anime/gogoanime/info/{id}".to_string()),
            watch: Some("{base}/anime/gogoanime/watch/{id}".to_string()),
        }
    }

    /// Jikan v4 routes. Jikan has no episode feed or stream links.
    pub fn jikan() -> Self {
        Self {
            search: Some("{base}/anime?q={query}&page={page}".to_string()),
            trending: Some("{base}/top/anime?page={page}".to_string()),
            recent_episodes: None,
            info: Some("{base}/anime/{id}/full".to_string()),
            watch: None,
        }
    }
}

/// One upstream source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceEndpoint {
    /// Unique name used in logs and attempt reports.
    pub name: String,
    #[serde(default)]
    pub kind: SourceKind,
    /// Substituted for `{base}` in templates.
    #[serde(default)]
    pub base_url: String,
    /// Disabled sources are skipped without being reported.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub templates: EndpointTemplates,
}

const fn enabled_by_default() -> bool {
    true
}

impl SourceEndpoint {
    pub fn new(name: impl Into<String>, kind: SourceKind, base_url: impl Into<String>) -> Self {
        let templates = match kind {
            SourceKind::Jikan => EndpointTemplates::jikan(),
            SourceKind::Consumet | SourceKind::Generic => EndpointTemplates::consumet(),
        };
        Self {
            name: name.into(),
            kind,
            base_url: base_url.into(),
            enabled: true,
            templates,
        }
    }

    #[must_use]
    pub fn with_templates(mut self, templates: EndpointTemplates) -> Self {
        self.templates = templates;
        self
    }

    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Everything the aggregator needs to know about its sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorConfig {
    /// Sources in priority order.
    pub sources: Vec<SourceEndpoint>,
    /// Bound on each individual request.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

fn default_sources() -> Vec<SourceEndpoint> {
    vec![
        SourceEndpoint::new("primary", SourceKind::Consumet, "https://api.consumet.org"),
        SourceEndpoint::new(
            "secondary",
            SourceKind::Consumet,
            "https://consumet-api-mirror.vercel.app",
        ),
        SourceEndpoint::new("tertiary", SourceKind::Jikan, "https://api.jikan.moe/v4"),
    ]
}

fn default_user_agent() -> String {
    format!(
        "anitrack/{} (+https://github.com/anitrack/anitrack)",
        env!("CARGO_PKG_VERSION")
    )
}

impl AggregatorConfig {
    /// Build a configuration with the given sources and default settings.
    pub fn with_sources(sources: Vec<SourceEndpoint>) -> Self {
        Self {
            sources,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(inline) = lookup(ENV_SOURCES) {
            config.sources = parse_sources(&inline)?;
        } else if let Some(path) = lookup(ENV_SOURCES_FILE) {
            config.sources = load_sources_file(Path::new(&path))?;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let millis: u64 = raw.trim().parse().map_err(|e| {
                Error::Config(format!("{ENV_TIMEOUT_MS} must be a number of milliseconds: {e}"))
            })?;
            config.timeout = Duration::from_millis(millis);
        }

        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = user_agent;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for mistakes that would make every call fall back.
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".into()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::Config("user agent must not be empty".into()));
        }
        if !self.sources.iter().any(|s| s.enabled) {
            return Err(Error::Config("at least one enabled source is required".into()));
        }

        let mut seen = HashSet::new();
        for source in &self.sources {
            let name = source.name.trim();
            if name.is_empty() {
                return Err(Error::Config("source names must not be empty".into()));
            }
            if !seen.insert(name) {
                return Err(Error::Config(format!("duplicate source name '{name}'")));
            }
        }

        Ok(())
    }

    /// Sources that will actually be queried, in order.
    pub fn enabled_sources(&self) -> impl Iterator<Item = (usize, &SourceEndpoint)> {
        self.sources.iter().enumerate().filter(|(_, s)| s.enabled)
    }
}

fn parse_sources(json: &str) -> Result<Vec<SourceEndpoint>> {
    serde_json::from_str(json)
        .map_err(|e| Error::Config(format!("invalid source list: {e}")))
}

fn load_sources_file(path: &Path) -> Result<Vec<SourceEndpoint>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("cannot read source list {}: {e}", path.display()))
    })?;
    parse_sources(&contents)
}
