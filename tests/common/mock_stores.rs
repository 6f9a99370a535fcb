/*!
 * Mock store implementations for testing
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use slovnik::database::{TranslationStore, Word};
use slovnik::errors::StoreError;

/// Store whose every call fails, counting the calls
#[derive(Default)]
pub struct BrokenStore {
    calls: AtomicUsize,
}

impl BrokenStore {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Database("database is locked".to_string()))
    }
}

#[async_trait]
impl TranslationStore for BrokenStore {
    async fn get_word(&self, _text: &str, _lang: &str) -> Result<Option<Word>, StoreError> {
        self.fail()
    }

    async fn get_translations(&self, _: &str, _: &str, _: &str, _: usize) -> Result<Vec<String>, StoreError> {
        self.fail()
    }

    async fn insert_translations_for_word(&self, _: &str, _: &str, _: &[String], _: &str) -> Result<(), StoreError> {
        self.fail()
    }

    async fn get_suggestions(&self, _: &str, _: &str, _: usize) -> Result<Vec<String>, StoreError> {
        self.fail()
    }
}

/// Store that never has anything and records the writes it receives
#[derive(Default)]
pub struct CountingStore {
    reads: AtomicUsize,
    writes: Mutex<Vec<(String, Vec<String>)>>,
}

impl CountingStore {
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> Vec<(String, Vec<String>)> {
        self.writes.lock().clone()
    }
}

#[async_trait]
impl TranslationStore for CountingStore {
    async fn get_word(&self, _text: &str, _lang: &str) -> Result<Option<Word>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }

    async fn get_translations(&self, _: &str, _: &str, _: &str, _: usize) -> Result<Vec<String>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn insert_translations_for_word(
        &self,
        word: &str,
        _lang_from: &str,
        translations: &[String],
        _lang_to: &str,
    ) -> Result<(), StoreError> {
        self.writes.lock().push((word.to_string(), translations.to_vec()));
        Ok(())
    }

    async fn get_suggestions(&self, _: &str, _: &str, _: usize) -> Result<Vec<String>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}
