/*!
 * Tests for application configuration
 */

use anyhow::Result;
use slovnik::app_config::{Config, LogLevel};
use std::fs;

use crate::common;

#[test]
fn test_default_shouldUseCzechToEnglishOnline() {
    let config = Config::default();

    assert_eq!(config.source_language, "cz");
    assert_eq!(config.target_language, "en");
    assert!(!config.offline_mode);
    assert_eq!(config.remote.endpoint, "https://slovnik.seznam.cz");
    assert_eq!(config.cache.max_translations, 1000);
    assert!(!config.extraction.commit_trailing_fragment);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefault() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;

    assert!(path.exists());
    assert_eq!(config.source_language, "cz");
    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded.remote.endpoint, config.remote.endpoint);
    Ok(())
}

#[test]
fn test_loadOrCreate_withPartialFile_shouldFillDefaults() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("conf.json");
    fs::write(&path, r#"{ "target_language": "de", "offline_mode": true, "log_level": "debug" }"#)?;

    let config = Config::load_or_create(&path)?;

    assert_eq!(config.source_language, "cz");
    assert_eq!(config.target_language, "de");
    assert!(config.offline_mode);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.remote.timeout_secs, 30);
    Ok(())
}

#[test]
fn test_loadOrCreate_withMalformedFile_shouldFail() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("conf.json");
    fs::write(&path, "{ not json")?;

    let result = Config::load_or_create(&path);

    assert!(result.is_err());
    assert!(format!("{:#}", result.unwrap_err()).contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_validate_withEmptyLanguage_shouldFail() {
    let mut config = Config::default();
    config.source_language = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroMaxTranslations_shouldFail() {
    let mut config = Config::default();
    config.cache.max_translations = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withNonHttpEndpoint_shouldFail() {
    let mut config = Config::default();
    config.remote.endpoint = "ftp://slovnik.seznam.cz".to_string();
    let error = config.validate().unwrap_err();
    assert!(error.to_string().contains("http or https"));
}

#[test]
fn test_resolveDatabasePath_withExplicitPath_shouldUseIt() -> Result<()> {
    let mut config = Config::default();
    config.cache.database_path = Some("/tmp/slovnik-test.db".to_string());

    let path = config.cache.resolve_database_path()?;

    assert_eq!(path, std::path::PathBuf::from("/tmp/slovnik-test.db"));
    Ok(())
}

#[test]
fn test_logLevel_toLevelFilter() {
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
