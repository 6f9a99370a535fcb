/*!
 * Database entity models.
 *
 * These structures map directly to database tables and provide
 * type-safe access to persisted data.
 */

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};

/// A looked-up word, unique per (text, source language)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Row id
    pub id: i64,
    /// Word text as resolved by the remote dictionary
    pub text: String,
    /// Source language code
    pub lang: String,
    /// When translations for this word were last fetched and stored
    pub load_date: DateTime<Utc>,
}

impl Word {
    /// Age of the stored translations relative to `now`
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now.signed_duration_since(self.load_date)
    }
}

/// Format a timestamp the way it is stored in the `load_date` column
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339()
}

/// Parse a `load_date` column value
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| anyhow!("Invalid timestamp '{}': {}", value, e))
}
