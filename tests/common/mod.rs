/*!
 * Common test utilities for the slovnik test suite
 */

use anyhow::Result;
use parking_lot::Mutex;
use std::sync::Arc;
use tempfile::TempDir;

use slovnik::database::{DatabaseConnection, Repository};
use slovnik::translation::NotificationSink;

// Re-export the mock stores module
pub mod mock_stores;

/// Route library logs to the test output
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Repository backed by a file in `dir`
pub fn create_file_repository(dir: &TempDir) -> Result<Arc<Repository>> {
    let connection = DatabaseConnection::new(dir.path().join("slovnik.db"))?;
    Ok(Arc::new(Repository::new(connection)))
}

/// Owned strings from literals
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Dictionary page with a headword and a raw translation block
pub fn dictionary_page(headword: &str, block: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{0} | Slovník</title></head>
<body>
  <header><h1>Slovník</h1></header>
  <div class="hgroup"><h1>{0}</h1><span class="pron">[pes]</span></div>
  <div id="fastMeanings">{1}</div>
  <footer>Seznam</footer>
</body>
</html>"#,
        headword, block
    )
}

/// Page for "pes" with two complete entries and an unterminated third one
pub fn dog_page() -> String {
    dictionary_page(
        "pes",
        r#"<a href="/en/dog">dog</a><span class="comma">, </span><a href="/en/hound">hound</a><br><a href="/en/cur">cur</a>"#,
    )
}

/// Page where the translation block is missing
pub fn not_found_page(headword: &str) -> String {
    format!(
        r#"<html><body><div class="hgroup"><h1>{}</h1></div><p>Nenalezeno</p></body></html>"#,
        headword
    )
}

/// Frameset page, which has no body element
pub fn frameset_page() -> String {
    r#"<html><frameset><frame src="x"></frameset></html>"#.to_string()
}

/// Sink that keeps every message
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
