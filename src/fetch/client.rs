//! HTTP client for the statistics endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// Upper bound on a single fetch, connect through body.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors produced while fetching the statistics line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with something other than 200 OK.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response headers arrived but the body could not be read.
    #[error("{0}")]
    Body(String),
}

impl FetchError {
    /// True for failures that feed the consecutive-failure counter.
    pub fn counts_toward_abort(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Status(_))
    }
}

/// Source of raw statistics bodies.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the full response body from `url`.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// `Fetcher` backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the fixed request timeout.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(concat!("stats-monitor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}
