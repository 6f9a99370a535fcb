use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::{Fetcher, RemoteResponse};
use crate::app_config::RemoteConfig;
use crate::errors::FetchError;

/// HTTP client for the Seznam online dictionary
#[derive(Debug, Clone)]
pub struct SeznamClient {
    /// Base URL of the dictionary site
    base_url: Url,
    /// HTTP client for making requests
    client: Client,
}

impl SeznamClient {
    /// Create a client from the remote section of the configuration
    pub fn new(config: &RemoteConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.endpoint)
            .map_err(|e| FetchError::InvalidQuery(format!("invalid endpoint '{}': {}", config.endpoint, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    /// Build the page URL for a query: `{endpoint}/{from}-{to}/?q={query}`
    pub fn page_url(&self, lang_from: &str, lang_to: &str, query: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidQuery(format!("endpoint cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .push(&format!("{}-{}", lang_from, lang_to))
            .push("");

        url.query_pairs_mut().clear().append_pair("q", query);

        Ok(url)
    }
}

#[async_trait]
impl Fetcher for SeznamClient {
    async fn fetch(&self, lang_from: &str, lang_to: &str, query: &str) -> Result<RemoteResponse, FetchError> {
        let url = self.page_url(lang_from, lang_to, query)?;
        debug!("Fetching {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            if e.is_timeout() {
                FetchError::Network(format!("request timed out: {}", e))
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        debug!("Received {} ({} bytes) for '{}'", status, body.len(), query);

        Ok(RemoteResponse { status, body })
    }
}
