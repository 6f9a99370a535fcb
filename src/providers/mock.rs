/*!
 * Mock fetcher implementation for testing.
 *
 * This module provides a fetcher that simulates different remote behaviors:
 * - `MockFetcher::page(body)` - Always answers `200 OK` with the given body
 * - `MockFetcher::status(code)` - Always answers with the given status
 * - `MockFetcher::failing(error)` - Always fails at the transport level
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::{Fetcher, RemoteResponse};
use crate::errors::FetchError;

/// What the mock answers for a request
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Answer with a response
    Page(RemoteResponse),
    /// Fail without a response
    Fail(FetchError),
}

/// A recorded request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    /// Source language
    pub lang_from: String,
    /// Target language
    pub lang_to: String,
    /// Looked-up word
    pub query: String,
}

/// Mock fetcher for testing lookup behavior
#[derive(Debug)]
pub struct MockFetcher {
    /// Reply used when no query-specific reply is scripted
    fallback: MockReply,
    /// Per-query replies
    scripted: Mutex<HashMap<String, MockReply>>,
    /// Request counter
    request_count: Arc<AtomicUsize>,
    /// Every request received, in order
    requests: Mutex<Vec<MockRequest>>,
    /// Artificial latency
    delay: Option<Duration>,
}

impl MockFetcher {
    /// Create a mock with the given fallback reply
    pub fn new(fallback: MockReply) -> Self {
        Self {
            fallback,
            scripted: Mutex::new(HashMap::new()),
            request_count: Arc::new(AtomicUsize::new(0)),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Always answer `200 OK` with `body`
    pub fn page(body: impl Into<String>) -> Self {
        Self::new(MockReply::Page(RemoteResponse::ok(body)))
    }

    /// Always answer with `status` and an empty body
    pub fn status(status: u16) -> Self {
        Self::new(MockReply::Page(RemoteResponse::new(status, "")))
    }

    /// Always fail with `error`
    pub fn failing(error: FetchError) -> Self {
        Self::new(MockReply::Fail(error))
    }

    /// Answer `query` with a specific reply
    pub fn on_query(self, query: impl Into<String>, reply: MockReply) -> Self {
        self.scripted.lock().insert(query.into(), reply);
        self
    }

    /// Wait before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of fetches performed
    pub fn call_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, lang_from: &str, lang_to: &str, query: &str) -> Result<RemoteResponse, FetchError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(MockRequest {
            lang_from: lang_from.to_string(),
            lang_to: lang_to.to_string(),
            query: query.to_string(),
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self
            .scripted
            .lock()
            .get(query)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone());

        match reply {
            MockReply::Page(response) => Ok(response),
            MockReply::Fail(error) => Err(error),
        }
    }
}
