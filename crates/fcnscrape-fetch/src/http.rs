//! HTTP document source
//!
//! Fetches static documentation pages and reference-list API responses with
//! reqwest. Each request carries its own timeout; there is no retry, a failed
//! request surfaces immediately as a [`FetchError`].

use fcnscrape_domain::traits::DocumentSource;
use fcnscrape_domain::{FetchError, FetchedDocument};
use std::time::Duration;
use tracing::debug;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("fcnscrape/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed [`DocumentSource`]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a new HTTP source
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be built (e.g. the
    /// platform TLS backend fails to initialize).
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl DocumentSource for HttpSource {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedDocument, FetchError> {
        debug!("GET {} (timeout {:?})", url, timeout);

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(FetchedDocument { status, body })
    }
}

/// Map a reqwest error onto the transport taxonomy
fn classify(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(e.to_string())
    } else if e.is_connect() {
        FetchError::Connect(e.to_string())
    } else {
        FetchError::Other(e.to_string())
    }
}
