//! Unsplash image lookup client
//!
//! Fetches one illustrative image URL for a query string. Lookup failures
//! are non-fatal everywhere this is consumed: the assembler degrades to an
//! absence marker instead of aborting the run.

use crate::config::ImageConfig;
use crate::error::ImageLookupError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;

/// An image-search capability: query in, at most one URL out
#[async_trait]
pub trait ImageLookup: Send + Sync {
    /// Look up an image URL for the query
    ///
    /// Returns `Ok(None)` when the service has no result for the query.
    ///
    /// # Errors
    /// * `ImageLookupError::Transport` - request could not be sent or parsed
    /// * `ImageLookupError::BadStatus` - unexpected HTTP status
    /// * `ImageLookupError::Timeout` - the fixed lookup timeout elapsed
    async fn lookup(&self, query: &str) -> Result<Option<String>, ImageLookupError>;
}

/// Search response from the Unsplash photos endpoint
#[derive(Deserialize, Debug)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Deserialize, Debug)]
struct SearchResult {
    urls: ImageUrls,
}

#[derive(Deserialize, Debug)]
struct ImageUrls {
    regular: String,
}

/// HTTP client for the Unsplash search API
pub struct UnsplashClient {
    client: reqwest::Client,
    access_key: String,
    base_url: String,
    lookup_timeout: Duration,
}

impl UnsplashClient {
    /// Create a client from configuration, sharing the given HTTP client.
    /// The base URL is taken from the config so tests can point it at a mock
    /// server.
    pub fn new(client: reqwest::Client, config: &ImageConfig) -> Self {
        Self {
            client,
            access_key: config.access_key.clone(),
            base_url: config.api_url.clone(),
            lookup_timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    async fn search(&self, query: &str) -> Result<Option<String>, ImageLookupError> {
        let url = format!("{}/search/photos", self.base_url);

        tracing::debug!(query = %query, "Searching Unsplash for an image");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("client_id", &self.access_key),
            ])
            .send()
            .await
            .map_err(|e| {
                ImageLookupError::Transport(format!("failed to send Unsplash request: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageLookupError::BadStatus(status.as_u16()));
        }

        let parsed: SearchResponse = response.json().await.map_err(|e| {
            ImageLookupError::Transport(format!("failed to parse Unsplash response: {e}"))
        })?;

        Ok(parsed.results.into_iter().next().map(|r| r.urls.regular))
    }
}

#[async_trait]
impl ImageLookup for UnsplashClient {
    async fn lookup(&self, query: &str) -> Result<Option<String>, ImageLookupError> {
        timeout(self.lookup_timeout, self.search(query))
            .await
            .map_err(|_| ImageLookupError::Timeout)?
    }
}
