//! HTTP client for the collection backend
//!
//! Thin reqwest wrapper over the three read-only endpoints the browse view
//! consumes. All failures are classified into `FetchError` here; callers
//! decide whether to surface or absorb them.

use crate::error::FetchError;
use anyhow::Context;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use types::catalog::{SourceCatalog, TagCatalog};
use types::feed::{ErrorBody, FeedItem, FeedResponse};
use types::filter::RequestDescriptor;

/// Configuration for the browse service
#[derive(Debug, Clone)]
pub struct BrowseConfig {
    /// Base URL of the collection backend
    pub base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the backend's feed and vocabulary endpoints
#[derive(Clone)]
pub struct FeedClient {
    http: Client,
    base_url: String,
}

impl FeedClient {
    /// Create a client for the configured backend
    pub fn new(config: &BrowseConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one feed page for a canonical descriptor
    ///
    /// The descriptor string is already the encoded query; it is appended
    /// verbatim so the request is byte-identical to the descriptor identity.
    pub async fn fetch_feed(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<Vec<FeedItem>, FetchError> {
        let url = format!("{}/api/feed?{}", self.base_url, descriptor.as_str());
        let response: FeedResponse = self.get_json(&url).await?;
        Ok(response.items)
    }

    /// Fetch the source vocabulary
    pub async fn fetch_sources(&self) -> Result<SourceCatalog, FetchError> {
        self.get_json(&format!("{}/api/sources", self.base_url)).await
    }

    /// Fetch the tag vocabularies
    pub async fn fetch_tags(&self) -> Result<TagCatalog, FetchError> {
        self.get_json(&format!("{}/api/tags", self.base_url)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url, "Backend request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        if !status.is_success() {
            // The error envelope is optional on the wire
            let body = response.json::<ErrorBody>().await.ok();
            return Err(FetchError::from_status(status, body));
        }

        let body = response.text().await.map_err(FetchError::transport)?;
        serde_json::from_str(&body).map_err(FetchError::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BrowseConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let config = BrowseConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..BrowseConfig::default()
        };
        let client = FeedClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:9000");
    }
}
