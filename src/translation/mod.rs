/*!
 * Translation lookup with a local cache and remote fallback.
 *
 * - `core`: Lookup service answering from the store or the remote dictionary
 * - `extractor`: Translation extraction from dictionary pages
 * - `freshness`: Reuse policy for stored translations
 * - `writer`: Background persistence of fetched translations
 * - `notifications`: User-facing failure messages
 */

// Re-export main types for easier usage
pub use self::core::{LookupOrigin, LookupResult, LookupStats, OfflineMode, TranslationService};
pub use self::extractor::{Extractor, Fragment, ParsedPage, TrailingFragment};
pub use self::notifications::{ChannelSink, LogSink, NotificationSink};
pub use self::writer::{StoreWriteQueue, StoreWriteRequest, StoreWriter, WriterSummary};

// Submodules
pub mod core;
pub mod extractor;
pub mod freshness;
pub mod notifications;
pub mod writer;
