/*!
 * Repository layer for database operations.
 *
 * This module provides the SQLite implementation of `TranslationStore`,
 * abstracting away the SQL details and providing type-safe access.
 */

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::connection::DatabaseConnection;
use super::models::{format_timestamp, parse_timestamp, Word};
use super::TranslationStore;
use crate::errors::StoreError;

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    /// Database connection
    db: DatabaseConnection,
}

impl Repository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Underlying connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Store translations with an explicit load timestamp
    ///
    /// `insert_translations_for_word` calls this with the current time; tests
    /// and imports use it to backdate entries.
    pub async fn insert_translations_at(
        &self,
        word: &str,
        lang_from: &str,
        translations: &[String],
        lang_to: &str,
        loaded_at: DateTime<Utc>,
    ) -> Result<()> {
        let word = word.to_string();
        let lang_from = lang_from.to_string();
        let lang_to = lang_to.to_string();
        let translations = translations.to_vec();

        self.db
            .transaction_async(move |tx| {
                let word_id = Self::upsert_word_sync(tx, &word, &lang_from, loaded_at)?;

                let superseded = tx.execute(
                    "DELETE FROM translations WHERE word_id = ?1 AND lang_to = ?2",
                    params![word_id, lang_to],
                )?;

                {
                    let mut stmt = tx.prepare(
                        r#"
                        INSERT INTO translations (word_id, lang_to, translation, position)
                        VALUES (?1, ?2, ?3, ?4)
                        "#,
                    )?;

                    for (position, translation) in translations.iter().enumerate() {
                        stmt.execute(params![word_id, lang_to, translation, position as i64])?;
                    }
                }

                debug!(
                    "Stored {} translations for '{}' ({} -> {}), replaced {}",
                    translations.len(),
                    word,
                    lang_from,
                    lang_to,
                    superseded
                );
                Ok(())
            })
            .await
    }

    /// Insert the word or refresh its load date, returning its row id
    fn upsert_word_sync(
        conn: &Connection,
        word: &str,
        lang: &str,
        loaded_at: DateTime<Utc>,
    ) -> Result<i64> {
        conn.execute(
            r#"
            INSERT INTO words (word, lang, load_date) VALUES (?1, ?2, ?3)
            ON CONFLICT(word, lang) DO UPDATE SET load_date = excluded.load_date
            "#,
            params![word, lang, format_timestamp(loaded_at)],
        )?;

        let id = conn.query_row(
            "SELECT id FROM words WHERE word = ?1 AND lang = ?2",
            params![word, lang],
            |row| row.get(0),
        )?;

        Ok(id)
    }

    /// Get a word by text and language (synchronous version for use within transactions)
    fn get_word_sync(conn: &Connection, text: &str, lang: &str) -> Result<Option<Word>> {
        let row = conn
            .query_row(
                "SELECT id, word, lang, load_date FROM words WHERE word = ?1 AND lang = ?2",
                params![text, lang],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((id, text, lang, load_date)) => Ok(Some(Word {
                id,
                text,
                lang,
                load_date: parse_timestamp(&load_date)?,
            })),
            None => Ok(None),
        }
    }

    /// Escape LIKE wildcards so the template is matched literally
    fn like_prefix(template: &str) -> String {
        let mut pattern = String::with_capacity(template.len() + 1);
        for c in template.chars() {
            if matches!(c, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

#[async_trait]
impl TranslationStore for Repository {
    async fn get_word(&self, text: &str, lang: &str) -> Result<Option<Word>, StoreError> {
        let text = text.to_string();
        let lang = lang.to_string();

        Ok(self
            .db
            .execute_async(move |conn| Self::get_word_sync(conn, &text, &lang))
            .await?)
    }

    async fn get_translations(
        &self,
        text: &str,
        lang_from: &str,
        lang_to: &str,
        max_count: usize,
    ) -> Result<Vec<String>, StoreError> {
        let text = text.to_string();
        let lang_from = lang_from.to_string();
        let lang_to = lang_to.to_string();

        Ok(self
            .db
            .execute_async(move |conn| {
                let mut stmt = conn.prepare(
                    r#"
                    SELECT t.translation
                    FROM translations t
                    JOIN words w ON w.id = t.word_id
                    WHERE w.word = ?1 AND w.lang = ?2 AND t.lang_to = ?3
                    ORDER BY t.position
                    LIMIT ?4
                    "#,
                )?;

                let translations = stmt
                    .query_map(
                        params![text, lang_from, lang_to, max_count as i64],
                        |row| row.get::<_, String>(0),
                    )?
                    .collect::<rusqlite::Result<Vec<_>>>()?;

                Ok(translations)
            })
            .await?)
    }

    async fn insert_translations_for_word(
        &self,
        word: &str,
        lang_from: &str,
        translations: &[String],
        lang_to: &str,
    ) -> Result<(), StoreError> {
        Ok(self
            .insert_translations_at(word, lang_from, translations, lang_to, Utc::now())
            .await?)
    }

    async fn get_suggestions(
        &self,
        template: &str,
        lang_from: &str,
        limit: usize,
    ) -> Result<Vec<String>, StoreError> {
        if template.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let pattern = Self::like_prefix(template);
        let lang_from = lang_from.to_string();

        Ok(self
            .db
            .execute_async(move |conn| {
                let mut stmt = conn.prepare(
                    r#"
                    SELECT word FROM words
                    WHERE lang = ?1 AND word LIKE ?2 ESCAPE '\'
                    ORDER BY word
                    LIMIT ?3
                    "#,
                )?;

                let words = stmt
                    .query_map(params![lang_from, pattern, limit as i64], |row| {
                        row.get::<_, String>(0)
                    })?
                    .collect::<rusqlite::Result<Vec<_>>>()?;

                Ok(words)
            })
            .await?)
    }
}
