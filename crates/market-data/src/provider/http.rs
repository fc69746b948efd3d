//! Shared HTTP plumbing for the document-based providers.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use crate::errors::MarketDataError;

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Some upstream sites reject requests without a browser user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Thin wrapper over a shared `reqwest::Client` that turns HTTP failures into
/// [`MarketDataError`]s tagged with the calling provider.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Download a binary document (spreadsheets).
    pub async fn get_bytes(&self, provider: &str, url: &str) -> Result<Vec<u8>, MarketDataError> {
        let response = self.send(provider, url).await?;
        let bytes = response.bytes().await?;
        debug!(provider, url, size = bytes.len(), "downloaded document");
        Ok(bytes.to_vec())
    }

    /// Download a text document (HTML pages).
    pub async fn get_text(&self, provider: &str, url: &str) -> Result<String, MarketDataError> {
        let response = self.send(provider, url).await?;
        let text = response.text().await?;
        debug!(provider, url, size = text.len(), "downloaded page");
        Ok(text)
    }

    async fn send(&self, provider: &str, url: &str) -> Result<Response, MarketDataError> {
        debug!(provider, url, "fetching");
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(provider, url, error = %e, "request failed");
            MarketDataError::Network(e)
        })?;

        check_status(provider, response.status())?;
        Ok(response)
    }
}

fn check_status(provider: &str, status: StatusCode) -> Result<(), MarketDataError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(MarketDataError::RateLimited {
            provider: provider.to_string(),
        });
    }
    if !status.is_success() {
        return Err(MarketDataError::provider(
            provider,
            format!("HTTP error: {}", status),
        ));
    }
    Ok(())
}
