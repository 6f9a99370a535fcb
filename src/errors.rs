/*!
 * Error types for the slovnik application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when fetching a page from the remote dictionary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The remote answered with a non-success status code
    #[error("Http error {status_code}")]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
    },

    /// No response at all (connection refused, DNS failure, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The response arrived but its body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The request could not be built from the query
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// Errors raised while extracting translations from a fetched page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The markup could not be parsed
    #[error("Failed to parse page: {0}")]
    Parse(String),

    /// The document has no body element
    #[error("Page has no body")]
    MissingBody,
}

/// Errors that can occur when talking to the translation store
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQL, schema or connection error
    #[error("Database error: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Database(error.to_string())
    }
}

impl From<anyhow::Error> for StoreError {
    fn from(error: anyhow::Error) -> Self {
        Self::Database(format!("{:#}", error))
    }
}

/// Errors a translation lookup can resolve with
///
/// Only remote transport failures surface here. Store failures are logged
/// and extraction failures degrade to an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The remote fetch failed
    #[error("{0}")]
    Fetch(#[from] FetchError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the remote dictionary
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error from the translation store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from a lookup
    #[error("Translation error: {0}")]
    Translation(#[from] TranslateError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
