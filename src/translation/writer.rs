/*!
 * Background persistence of fetched translations.
 *
 * Lookups enqueue write requests and return immediately. A single task
 * drains the queue in order and writes each request to the store once;
 * failures are logged and the request is dropped.
 */

use log::{debug, error};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::database::TranslationStore;

/// Translations waiting to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreWriteRequest {
    /// Resolved headword
    pub word: String,
    /// Source language code
    pub lang_from: String,
    /// Translations in extraction order
    pub translations: Vec<String>,
    /// Target language code
    pub lang_to: String,
}

enum WriterMessage {
    Write(StoreWriteRequest),
    Flush(oneshot::Sender<()>),
}

/// Outcome counts reported when the writer task ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterSummary {
    /// Requests stored successfully
    pub written: usize,
    /// Requests whose write failed
    pub failed: usize,
}

/// Sending half of the write queue
#[derive(Clone)]
pub struct StoreWriteQueue {
    sender: mpsc::UnboundedSender<WriterMessage>,
}

impl StoreWriteQueue {
    /// Queue a request without waiting for it to be written
    pub fn enqueue(&self, request: StoreWriteRequest) {
        let word = request.word.clone();
        if self.sender.send(WriterMessage::Write(request)).is_err() {
            error!("Store writer has stopped, dropping translations for '{}'", word);
        }
    }

    /// Wait until every request queued before this call has been attempted
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.sender.send(WriterMessage::Flush(done)).is_ok() {
            let _ = wait.await;
        }
    }
}

/// Spawns the background writer task
pub struct StoreWriter;

impl StoreWriter {
    /// Start the writer on the current tokio runtime
    ///
    /// The task ends once every `StoreWriteQueue` clone has been dropped.
    pub fn spawn(store: Arc<dyn TranslationStore>) -> (StoreWriteQueue, JoinHandle<WriterSummary>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(Self::run(store, receiver));
        (StoreWriteQueue { sender }, handle)
    }

    async fn run(
        store: Arc<dyn TranslationStore>,
        mut receiver: mpsc::UnboundedReceiver<WriterMessage>,
    ) -> WriterSummary {
        let mut summary = WriterSummary::default();

        while let Some(message) = receiver.recv().await {
            match message {
                WriterMessage::Write(request) => {
                    match store
                        .insert_translations_for_word(
                            &request.word,
                            &request.lang_from,
                            &request.translations,
                            &request.lang_to,
                        )
                        .await
                    {
                        Ok(()) => {
                            summary.written += 1;
                            debug!(
                                "Persisted {} translations for '{}' ({} -> {})",
                                request.translations.len(),
                                request.word,
                                request.lang_from,
                                request.lang_to
                            );
                        }
                        Err(e) => {
                            summary.failed += 1;
                            error!("Failed to persist translations for '{}': {}", request.word, e);
                        }
                    }
                }
                WriterMessage::Flush(done) => {
                    let _ = done.send(());
                }
            }
        }

        debug!(
            "Store writer finished: {} written, {} failed",
            summary.written, summary.failed
        );
        summary
    }
}
