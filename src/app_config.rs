use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Default source language code
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Default target language code
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Start without network access
    #[serde(default)]
    pub offline_mode: bool,

    /// Remote dictionary settings
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Local cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Remote dictionary configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RemoteConfig {
    /// Base URL of the dictionary site
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Local translation cache configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CacheConfig {
    /// Database file; the per-user data directory is used when unset
    #[serde(default)]
    pub database_path: Option<String>,

    /// Maximum number of stored translations returned for one lookup
    #[serde(default = "default_max_translations")]
    pub max_translations: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            max_translations: default_max_translations(),
        }
    }
}

impl CacheConfig {
    /// Resolved database path
    pub fn resolve_database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => crate::database::DatabaseConnection::default_database_path(),
        }
    }
}

/// Extraction configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ExtractionConfig {
    /// Keep text after the last delimiter of a translation block
    ///
    /// Off by default so results match what earlier versions stored.
    #[serde(default)]
    pub commit_trailing_fragment: bool,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching `log` filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    "cz".to_string()
}

fn default_target_language() -> String {
    "en".to_string()
}

fn default_endpoint() -> String {
    "https://slovnik.seznam.cz".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("slovnik/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_translations() -> usize {
    1000
}

impl Config {
    /// Load the configuration from `path`, writing a default file if none exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;

            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

            Ok(config)
        } else {
            warn!("Config file not found at '{}', creating default config.", path.display());

            let config = Config::default();
            config.save(path)?;
            Ok(config)
        }
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.source_language.trim().is_empty() {
            return Err(anyhow!("Source language must not be empty"));
        }

        if self.target_language.trim().is_empty() {
            return Err(anyhow!("Target language must not be empty"));
        }

        if self.cache.max_translations == 0 {
            return Err(anyhow!("cache.max_translations must be greater than zero"));
        }

        if self.remote.timeout_secs == 0 {
            return Err(anyhow!("remote.timeout_secs must be greater than zero"));
        }

        let endpoint = url::Url::parse(&self.remote.endpoint)
            .with_context(|| format!("Invalid remote endpoint: {}", self.remote.endpoint))?;

        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(anyhow!(
                "Remote endpoint must use http or https, got '{}'",
                endpoint.scheme()
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            offline_mode: false,
            remote: RemoteConfig::default(),
            cache: CacheConfig::default(),
            extraction: ExtractionConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
