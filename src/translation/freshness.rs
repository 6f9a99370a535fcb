/*!
 * Freshness policy for stored translations.
 */

use chrono::{DateTime, Utc};

use crate::database::Word;

/// Stored translations older than this many whole days are refetched
pub const MAX_AGE_DAYS: i64 = 7;

/// Whether a stored word's translations can be reused at `now`
///
/// A missing word is never fresh. Age is counted in whole elapsed days, so a
/// word loaded 6 days and 23 hours ago is still fresh.
pub fn is_fresh(word: Option<&Word>, now: DateTime<Utc>) -> bool {
    match word {
        Some(word) => word.age(now).num_days() < MAX_AGE_DAYS,
        None => false,
    }
}
