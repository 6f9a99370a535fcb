/*!
 * # slovnik - cached dictionary lookups
 *
 * A Rust library for looking up word translations on an online dictionary
 * while keeping a local SQLite cache of everything fetched.
 *
 * ## Features
 *
 * - Answer lookups from the local cache while entries are fresh (7 days)
 * - Fall back to the remote dictionary page and extract its translations
 * - Persist fetched translations in the background without delaying lookups
 * - Offline mode answering from the cache only
 * - Word suggestions by prefix from previously stored words
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `app_controller`: Wiring of configuration, store, fetcher and service
 * - `database`: SQLite storage of words and translations
 * - `providers`: Remote dictionary clients
 *   - `providers::seznam`: HTTP client for the dictionary site
 *   - `providers::mock`: Scripted fetcher for tests
 * - `translation`: Lookup service, extraction, freshness and background writes
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod database;
pub mod errors;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use database::{Repository, TranslationStore};
pub use errors::{AppError, ExtractError, FetchError, StoreError, TranslateError};
pub use providers::{Fetcher, RemoteResponse};
pub use translation::{LookupOrigin, LookupResult, OfflineMode, TranslationService};
