use anyhow::{Context, Result};
use log::{debug, info};
use std::sync::Arc;

use crate::app_config::Config;
use crate::database::connection::DatabaseStats;
use crate::database::{DatabaseConnection, Repository};
use crate::providers::seznam::SeznamClient;
use crate::providers::Fetcher;
use crate::translation::{
    Extractor, LogSink, LookupResult, NotificationSink, OfflineMode, TrailingFragment, TranslationService,
    WriterSummary,
};

// @module: Application controller for dictionary lookups

/// Main application controller wiring configuration, store and remote client
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Local translation store
    repository: Arc<Repository>,
    // @field: Lookup service
    service: TranslationService,
}

impl Controller {
    /// Create a controller from the configuration
    ///
    /// Opens the database at the configured path and talks to the configured
    /// dictionary endpoint. Must be called inside a tokio runtime.
    pub fn with_config(config: Config) -> Result<Self> {
        let db_path = config.cache.resolve_database_path()?;
        debug!("Opening translation store at {:?}", db_path);

        let connection = DatabaseConnection::new(&db_path)
            .with_context(|| format!("Failed to open database at {:?}", db_path))?;
        let repository = Arc::new(Repository::new(connection));

        let fetcher = SeznamClient::new(&config.remote).context("Failed to create dictionary client")?;

        Ok(Self::with_parts(config, repository, Arc::new(fetcher), Arc::new(LogSink)))
    }

    /// Create a controller from already built parts
    pub fn with_parts(
        config: Config,
        repository: Arc<Repository>,
        fetcher: Arc<dyn Fetcher>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let trailing = if config.extraction.commit_trailing_fragment {
            TrailingFragment::Commit
        } else {
            TrailingFragment::Drop
        };

        let service = TranslationService::new(repository.clone(), fetcher)
            .with_notifier(notifier)
            .with_offline_mode(OfflineMode::new(config.offline_mode))
            .with_extractor(Extractor::new(trailing))
            .with_max_translations(config.cache.max_translations);

        Self {
            config,
            repository,
            service,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying lookup service
    pub fn service(&self) -> &TranslationService {
        &self.service
    }

    /// Look up a word, defaulting the language pair to the configured one
    pub async fn translate(&self, word: &str, lang_from: Option<&str>, lang_to: Option<&str>) -> Result<LookupResult> {
        let lang_from = lang_from.unwrap_or(&self.config.source_language);
        let lang_to = lang_to.unwrap_or(&self.config.target_language);

        let result = self.service.translate(word, lang_from, lang_to).await?;
        debug!(
            "Lookup of '{}' resolved to '{}' with {} translations ({:?})",
            word,
            result.word,
            result.translations.len(),
            result.origin
        );
        Ok(result)
    }

    /// Stored words starting with `prefix`
    pub async fn suggest(&self, prefix: &str, lang_from: Option<&str>, limit: usize) -> Vec<String> {
        let lang_from = lang_from.unwrap_or(&self.config.source_language);
        self.service.get_suggestions(prefix, lang_from, limit).await
    }

    /// Size of the local store
    pub fn database_stats(&self) -> Result<DatabaseStats> {
        self.repository.connection().stats()
    }

    /// Wait for pending writes and stop the background writer
    pub async fn shutdown(self) -> WriterSummary {
        let stats = self.service.stats();
        let summary = self.service.shutdown().await;
        info!(
            "Lookups: {} cached, {} fetched, {} offline; {} writes stored, {} failed",
            stats.hits, stats.remote_fetches, stats.offline_misses, summary.written, summary.failed
        );
        summary
    }

    /// Human readable listing of a lookup result
    pub fn format_result(result: &LookupResult) -> String {
        let mut output = result.word.clone();

        if result.translations.is_empty() {
            output.push_str("\n  (no translations)");
        }

        for (index, translation) in result.translations.iter().enumerate() {
            output.push_str(&format!("\n  {}. {}", index + 1, translation));
        }

        output
    }
}
