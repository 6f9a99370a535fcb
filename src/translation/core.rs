/*!
 * Core lookup service implementation.
 *
 * `TranslationService` answers a lookup from the local store when the
 * stored word is fresh and has translations for the requested pair,
 * otherwise it fetches the dictionary page, extracts the translations and
 * hands them to the background writer.
 */

use chrono::Utc;
use log::{debug, error, warn};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

use super::extractor::Extractor;
use super::freshness;
use super::notifications::{LogSink, NotificationSink};
use super::writer::{StoreWriteQueue, StoreWriteRequest, StoreWriter, WriterSummary};
use crate::database::TranslationStore;
use crate::errors::{FetchError, TranslateError};
use crate::providers::Fetcher;

/// Upper bound on stored translations returned for one lookup
pub const MAX_STORED_TRANSLATIONS: usize = 1000;

/// Shared offline switch, read on every lookup
#[derive(Debug, Clone, Default)]
pub struct OfflineMode(Arc<AtomicBool>);

impl OfflineMode {
    /// Create a switch with the given initial state
    pub fn new(offline: bool) -> Self {
        Self(Arc::new(AtomicBool::new(offline)))
    }

    /// Whether network access is currently disabled
    pub fn is_offline(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Enable or disable network access for all holders of this switch
    pub fn set(&self, offline: bool) {
        self.0.store(offline, Ordering::SeqCst);
    }
}

/// Where a lookup result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOrigin {
    /// The question was empty
    Empty,
    /// Fresh translations from the local store
    Cache,
    /// Fetched from the remote dictionary
    Remote,
    /// Cache miss while offline
    Offline,
}

/// Resolved word and its translations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Word the translations belong to
    pub word: String,
    /// Translations in dictionary order
    pub translations: Vec<String>,
    /// Source of the result
    pub origin: LookupOrigin,
}

impl LookupResult {
    fn new(word: impl Into<String>, translations: Vec<String>, origin: LookupOrigin) -> Self {
        Self {
            word: word.into(),
            translations,
            origin,
        }
    }

    /// Whether no translations were found
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

/// Lookup counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupStats {
    /// Lookups answered from the store
    pub hits: usize,
    /// Lookups the store could not answer
    pub misses: usize,
    /// Misses answered empty because of offline mode
    pub offline_misses: usize,
    /// Remote fetches issued
    pub remote_fetches: usize,
    /// Remote fetches that failed
    pub fetch_failures: usize,
}

impl LookupStats {
    /// Share of lookups answered from the store
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Translation lookup service
///
/// Must be created inside a tokio runtime, which hosts the background writer.
/// Share it between tasks behind an `Arc`; lookups take `&self`.
pub struct TranslationService {
    store: Arc<dyn TranslationStore>,
    fetcher: Arc<dyn Fetcher>,
    notifier: Arc<dyn NotificationSink>,
    offline: OfflineMode,
    extractor: Extractor,
    max_translations: usize,
    writes: StoreWriteQueue,
    writer: JoinHandle<WriterSummary>,
    stats: Mutex<LookupStats>,
}

impl TranslationService {
    /// Create a service that logs notifications and starts online
    pub fn new(store: Arc<dyn TranslationStore>, fetcher: Arc<dyn Fetcher>) -> Self {
        let (writes, writer) = StoreWriter::spawn(store.clone());

        Self {
            store,
            fetcher,
            notifier: Arc::new(LogSink),
            offline: OfflineMode::default(),
            extractor: Extractor::default(),
            max_translations: MAX_STORED_TRANSLATIONS,
            writes,
            writer,
            stats: Mutex::new(LookupStats::default()),
        }
    }

    /// Send user-facing messages to `notifier`
    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationSink>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Use a shared offline switch
    pub fn with_offline_mode(mut self, offline: OfflineMode) -> Self {
        self.offline = offline;
        self
    }

    /// Use a specific extractor
    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Bound the number of stored translations returned per lookup
    pub fn with_max_translations(mut self, max_translations: usize) -> Self {
        self.max_translations = max_translations.max(1);
        self
    }

    /// Handle to the offline switch
    pub fn offline_mode(&self) -> OfflineMode {
        self.offline.clone()
    }

    /// Snapshot of the lookup counters
    pub fn stats(&self) -> LookupStats {
        *self.stats.lock()
    }

    /// Translate `question` from `lang_from` to `lang_to`
    ///
    /// Resolves with an error only when the remote fetch fails; the failure
    /// is also reported to the notifier.
    pub async fn translate(
        &self,
        question: &str,
        lang_from: &str,
        lang_to: &str,
    ) -> Result<LookupResult, TranslateError> {
        if question.is_empty() {
            return Ok(LookupResult::new("", Vec::new(), LookupOrigin::Empty));
        }

        if let Some(translations) = self.fresh_translations(question, lang_from, lang_to).await {
            debug!(
                "Cache hit for '{}' ({} -> {}): {} translations",
                question,
                lang_from,
                lang_to,
                translations.len()
            );
            self.stats.lock().hits += 1;
            return Ok(LookupResult::new(question, translations, LookupOrigin::Cache));
        }

        debug!("Cache miss for '{}' ({} -> {})", question, lang_from, lang_to);
        self.stats.lock().misses += 1;

        if self.offline.is_offline() {
            self.stats.lock().offline_misses += 1;
            return Ok(LookupResult::new(question, Vec::new(), LookupOrigin::Offline));
        }

        self.run_online_translation(question, lang_from, lang_to).await
    }

    /// Stored words of `lang_from` starting with `template`
    ///
    /// Store failures are logged and yield no suggestions.
    pub async fn get_suggestions(&self, template: &str, lang_from: &str, limit: usize) -> Vec<String> {
        match self.store.get_suggestions(template, lang_from, limit).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                warn!("Failed to load suggestions for '{}': {}", template, e);
                Vec::new()
            }
        }
    }

    /// Wait until every write queued so far has been attempted
    pub async fn flush(&self) {
        self.writes.flush().await;
    }

    /// Stop the service, letting the writer drain its queue
    pub async fn shutdown(self) -> WriterSummary {
        let Self { writes, writer, .. } = self;
        drop(writes);

        match writer.await {
            Ok(summary) => summary,
            Err(e) => {
                error!("Store writer task failed: {}", e);
                WriterSummary::default()
            }
        }
    }

    /// Stored translations if the word is fresh and has some for this pair
    async fn fresh_translations(&self, question: &str, lang_from: &str, lang_to: &str) -> Option<Vec<String>> {
        let word = match self.store.get_word(question, lang_from).await {
            Ok(word) => word,
            Err(e) => {
                warn!("Freshness check for '{}' failed, treating as miss: {}", question, e);
                return None;
            }
        };

        if !freshness::is_fresh(word.as_ref(), Utc::now()) {
            return None;
        }

        match self
            .store
            .get_translations(question, lang_from, lang_to, self.max_translations)
            .await
        {
            Ok(translations) if !translations.is_empty() => Some(translations),
            Ok(_) => None,
            Err(e) => {
                warn!("Loading stored translations for '{}' failed, treating as miss: {}", question, e);
                None
            }
        }
    }

    async fn run_online_translation(
        &self,
        question: &str,
        lang_from: &str,
        lang_to: &str,
    ) -> Result<LookupResult, TranslateError> {
        self.stats.lock().remote_fetches += 1;

        let response = match self.fetcher.fetch(lang_from, lang_to, question).await {
            Ok(response) => response,
            Err(e) => return Err(self.report_fetch_failure(e)),
        };

        if !response.is_success() {
            return Err(self.report_fetch_failure(FetchError::HttpStatus {
                status_code: response.status,
            }));
        }

        match self.extractor.parse_page(&response.body, question) {
            Ok(page) => {
                if !page.translations.is_empty() {
                    self.writes.enqueue(StoreWriteRequest {
                        word: page.word.clone(),
                        lang_from: lang_from.to_string(),
                        translations: page.translations.clone(),
                        lang_to: lang_to.to_string(),
                    });
                }
                Ok(LookupResult::new(page.word, page.translations, LookupOrigin::Remote))
            }
            Err(e) => {
                error!("Failed to extract translations for '{}': {}", question, e);
                self.notifier.notify(&e.to_string());
                Ok(LookupResult::new(question, Vec::new(), LookupOrigin::Remote))
            }
        }
    }

    fn report_fetch_failure(&self, error: FetchError) -> TranslateError {
        error!("{}", error);
        self.stats.lock().fetch_failures += 1;
        self.notifier.notify(&error.to_string());
        TranslateError::Fetch(error)
    }
}
