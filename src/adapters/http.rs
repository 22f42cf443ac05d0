//! Image fetching over HTTP
//!
//! Each image is requested exactly once, without retries. Any transport
//! error or non-success status is a failure.

use crate::config::FetchConfig;
use crate::domain::{LotpackError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use url::Url;

/// Source of image bytes
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetches the full body behind `url`
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// `reqwest`-backed image fetcher
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    /// Builds the HTTP client from fetch settings
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .user_agent(config.user_agent.clone());

        if !config.tls_verify {
            tracing::warn!("TLS certificate verification disabled for image fetching");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| LotpackError::Http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let parsed = Url::parse(url)
            .map_err(|e| LotpackError::Http(format!("Invalid image URL '{url}': {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LotpackError::Http(format!(
                "Unsupported URL scheme '{}' for {url}",
                parsed.scheme()
            )));
        }

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| LotpackError::Http(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LotpackError::Http(format!("Unexpected status {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LotpackError::Http(format!("Failed to read response body: {e}")))?;

        tracing::debug!(url = %url, bytes = body.len(), "Fetched image");
        Ok(body.to_vec())
    }
}
