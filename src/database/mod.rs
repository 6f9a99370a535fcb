/*!
 * Database module for persistent storage of looked-up words.
 *
 * This module provides SQLite-based persistence for:
 * - Words with the time their translations were last fetched
 * - Ordered translations per word and target language
 * - Prefix search over stored words for suggestions
 */

use async_trait::async_trait;

use crate::errors::StoreError;

pub mod schema;
pub mod connection;
pub mod repository;
pub mod models;

pub use connection::DatabaseConnection;
pub use models::Word;
pub use repository::Repository;

/// Storage contract used by the lookup service
///
/// Every call is expected to be atomic on its own; implementations must be
/// safe to use from several tasks at once.
#[async_trait]
pub trait TranslationStore: Send + Sync {
    /// Look up a stored word by text and source language
    async fn get_word(&self, text: &str, lang: &str) -> Result<Option<Word>, StoreError>;

    /// Stored translations for a word and language pair, in extraction order
    async fn get_translations(
        &self,
        text: &str,
        lang_from: &str,
        lang_to: &str,
        max_count: usize,
    ) -> Result<Vec<String>, StoreError>;

    /// Replace the translations of `word` into `lang_to` and mark the word as freshly loaded
    async fn insert_translations_for_word(
        &self,
        word: &str,
        lang_from: &str,
        translations: &[String],
        lang_to: &str,
    ) -> Result<(), StoreError>;

    /// Stored words of `lang_from` starting with `template`
    async fn get_suggestions(
        &self,
        template: &str,
        lang_from: &str,
        limit: usize,
    ) -> Result<Vec<String>, StoreError>;
}
