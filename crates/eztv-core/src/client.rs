//! HTTP client for EZTV
//!
//! This module provides a thin HTTP client over the index site and its
//! companion JSON API. Each call issues exactly one request; there is no
//! retry loop, no backoff, and no rate limiting.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{EztvError, Result};

/// Base URL for the EZTV index site
const EZTV_BASE_URL: &str = "https://eztv.wf";

/// Base URL for the torrent-listing JSON API
const EZTV_API_BASE_URL: &str = "https://eztv.re/api";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the EZTV HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the index site (default: `https://eztv.wf`)
    pub base_url: String,
    /// Base URL of the torrent-listing JSON API (default: `https://eztv.re/api`)
    pub api_base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: EZTV_BASE_URL.to_string(),
            api_base_url: EZTV_API_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the EZTV index site and JSON API
///
/// Page fetches return the body text regardless of HTTP status: the site
/// answers unknown show ids with a regular 200 page whose parse yields an
/// empty title, and that is where "not found" is decided. Only transport
/// failures surface from here.
pub struct EztvClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Base URL of the index site
    base_url: String,
    /// Base URL of the JSON API
    api_base_url: String,
}

impl EztvClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            api_base_url: config.api_base_url,
        })
    }

    /// Fetch page text from an index-site path
    ///
    /// # Arguments
    /// * `path` - Relative path on the index site (e.g., "/showlist/")
    ///
    /// # Returns
    /// The body text, whatever the response status
    ///
    /// # Errors
    /// `EztvError::Http` on transport failure
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        Ok(response.text().await?)
    }

    /// Fetch and decode a JSON document from an API path
    ///
    /// # Arguments
    /// * `path_and_query` - Relative path with query string
    ///   (e.g., "/get-torrents?limit=10&page=1")
    ///
    /// # Errors
    /// `EztvError::Request` wrapping the transport or decode failure message
    pub async fn fetch_api<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let url = format!("{}{}", self.api_base_url, path_and_query);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| EztvError::Request(e.to_string()))?;

        response
            .json::<T>()
            .await
            .map_err(|e| EztvError::Request(e.to_string()))
    }

    /// Get the configured index-site base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
