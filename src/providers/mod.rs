/*!
 * Remote dictionary clients.
 *
 * This module contains the fetcher implementations the lookup service
 * falls back to on a cache miss:
 * - Seznam: HTTP client for the online dictionary
 * - Mock: scripted responses for tests and offline demos
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::FetchError;

/// Raw answer from the remote dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, usually HTML
    pub body: String,
}

impl RemoteResponse {
    /// Create a response with the given status and body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Common trait for remote dictionary sources
///
/// Exactly one outcome is produced per call: a response (with any status) or
/// a transport failure.
#[async_trait]
pub trait Fetcher: Send + Sync + Debug {
    /// Fetch the dictionary page for `query` in the given language pair
    ///
    /// # Arguments
    /// * `lang_from` - Source language code
    /// * `lang_to` - Target language code
    /// * `query` - Word to look up
    ///
    /// # Returns
    /// * `Result<RemoteResponse, FetchError>` - Status and body, or a transport error
    async fn fetch(&self, lang_from: &str, lang_to: &str, query: &str) -> Result<RemoteResponse, FetchError>;
}

pub mod mock;
pub mod seznam;
