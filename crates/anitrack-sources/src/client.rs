//! HTTP transport and the ordered source fallback loop.

use std::future::Future;
use std::sync::Arc;

use anitrack_core::{Error, HttpError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{AggregatorConfig, SourceEndpoint, SourceKind};
use crate::report::{Operation, Origin, Resolved, SourceAttempt};
use crate::template::{render, TemplateParams};

/// Fetches a JSON document from a URL.
///
/// The aggregator is generic over this so tests can script source behavior.
pub trait Transport: Send + Sync {
    /// GET `url` and parse the body as JSON.
    ///
    /// Non-2xx statuses, network failures and non-JSON bodies are errors.
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the headers and timeout from `config`.
    pub fn new(config: &AggregatorConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::Config(format!("invalid user agent: {e}")))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Http(HttpError::Timeout)
            } else if e.is_connect() {
                Error::Http(HttpError::ConnectionFailed(e.to_string()))
            } else if e.is_builder() {
                Error::Http(HttpError::InvalidUrl(e.to_string()))
            } else {
                Error::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Http(HttpError::StatusError {
                status: status.as_u16(),
                message,
            }));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                Error::Http(HttpError::Timeout)
            } else {
                Error::Network(format!("Failed to read response body: {e}"))
            }
        })?;

        serde_json::from_slice(&body)
            .map_err(|e| Error::Parse(format!("response is not JSON: {e}")))
    }
}

/// Resolves anime data from an ordered list of sources.
///
/// Holds only immutable configuration and the transport, so clones are
/// cheap and concurrent calls do not interact.
#[derive(Clone)]
pub struct ContentAggregator<T = HttpTransport> {
    transport: T,
    config: Arc<AggregatorConfig>,
}

impl ContentAggregator {
    /// Create an aggregator that talks HTTP to the configured sources.
    pub fn new(config: AggregatorConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create an aggregator from `ANITRACK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(AggregatorConfig::from_env()?)
    }
}

impl<T: Transport> ContentAggregator<T> {
    /// Create an aggregator with a custom transport.
    pub fn with_transport(config: AggregatorConfig, transport: T) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Try each enabled source in order and return the first usable result.
    ///
    /// `extract` turns a payload into a result or explains why the payload
    /// is unusable. Later sources are not contacted once one succeeds.
    pub(crate) async fn first_usable<R, F>(
        &self,
        operation: Operation,
        params: &TemplateParams<'_>,
        extract: F,
    ) -> Resolved<Option<R>>
    where
        F: Fn(SourceKind, &Value) -> Result<R>,
    {
        let mut attempts = Vec::new();

        for (index, source) in self.config.enabled_sources() {
            let outcome = match self.fetch(source, operation, params).await {
                Ok(payload) => extract(source.kind, &payload),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(value) => {
                    debug!(source = %source.name, %operation, "source served request");
                    attempts.push(SourceAttempt::served(&source.name));
                    return Resolved {
                        value: Some(value),
                        origin: Origin::Source {
                            index,
                            name: source.name.clone(),
                        },
                        attempts,
                    };
                }
                Err(e) => {
                    warn!(
                        source = %source.name,
                        %operation,
                        kind = %e.kind(),
                        "source failed: {e}"
                    );
                    attempts.push(SourceAttempt::failed(&source.name, &e));
                }
            }
        }

        warn!(%operation, attempts = attempts.len(), "all sources failed");
        Resolved {
            value: None,
            origin: Origin::Unavailable,
            attempts,
        }
    }

    /// One bounded request against one source.
    async fn fetch(
        &self,
        source: &SourceEndpoint,
        operation: Operation,
        params: &TemplateParams<'_>,
    ) -> Result<Value> {
        let template = source
            .templates
            .for_operation(operation)
            .ok_or_else(|| Error::Unsupported(operation.to_string()))?;

        let url = render(template, &source.base_url, params);
        url::Url::parse(&url)
            .map_err(|e| Error::Http(HttpError::InvalidUrl(format!("{url}: {e}"))))?;

        debug!(source = %source.name, %url, "querying source");

        tokio::time::timeout(self.config.timeout, self.transport.get_json(&url))
            .await
            .map_err(|_| Error::Http(HttpError::Timeout))?
    }
}
