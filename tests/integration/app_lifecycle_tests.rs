/*!
 * Full controller lifecycle tests
 */

use anyhow::Result;
use std::sync::Arc;

use slovnik::app_config::Config;
use slovnik::providers::mock::MockFetcher;
use slovnik::translation::LookupOrigin;
use slovnik::Controller;

use crate::common::{self, RecordingSink};

fn test_config() -> Config {
    let mut config = Config::default();
    config.source_language = "cz".to_string();
    config.target_language = "en".to_string();
    config
}

#[tokio::test]
async fn test_controller_translateThenRestart_shouldServeFromDatabase() -> Result<()> {
    let dir = common::create_temp_dir()?;

    let fetcher = Arc::new(MockFetcher::page(common::dog_page()));
    let controller = Controller::with_parts(
        test_config(),
        common::create_file_repository(&dir)?,
        fetcher.clone(),
        RecordingSink::new(),
    );
    let result = controller.translate("pes", None, None).await?;
    let summary = controller.shutdown().await;

    assert_eq!(result.translations, vec!["dog", "hound"]);
    assert_eq!(summary.written, 1);

    let mut offline = test_config();
    offline.offline_mode = true;
    let fetcher = Arc::new(MockFetcher::page(common::dog_page()));
    let controller = Controller::with_parts(
        offline,
        common::create_file_repository(&dir)?,
        fetcher.clone(),
        RecordingSink::new(),
    );
    let result = controller.translate("pes", None, None).await?;

    assert_eq!(result.origin, LookupOrigin::Cache);
    assert_eq!(fetcher.call_count(), 0);
    assert_eq!(controller.suggest("p", None, 10).await, vec!["pes"]);
    assert_eq!(controller.database_stats()?.word_count, 1);
    controller.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn test_controller_withLanguageOverride_shouldUseIt() -> Result<()> {
    let fetcher = Arc::new(MockFetcher::page(common::dog_page()));
    let controller = Controller::with_parts(
        test_config(),
        Arc::new(slovnik::Repository::new_in_memory()?),
        fetcher.clone(),
        RecordingSink::new(),
    );

    controller.translate("pes", Some("cz"), Some("de")).await?;

    assert_eq!(fetcher.requests()[0].lang_to, "de");
    controller.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn test_controller_withCommitTrailingFragment_shouldKeepLastEntry() -> Result<()> {
    let mut config = test_config();
    config.extraction.commit_trailing_fragment = true;
    let controller = Controller::with_parts(
        config,
        Arc::new(slovnik::Repository::new_in_memory()?),
        Arc::new(MockFetcher::page(common::dog_page())),
        RecordingSink::new(),
    );

    let result = controller.translate("pes", None, None).await?;

    assert_eq!(result.translations, vec!["dog", "hound", "cur"]);
    controller.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn test_controller_withConfig_shouldOpenConfiguredDatabase() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let db_path = dir.path().join("nested").join("cache.db");
    let mut config = test_config();
    config.offline_mode = true;
    config.cache.database_path = Some(db_path.to_string_lossy().into_owned());

    let controller = Controller::with_config(config)?;
    let result = controller.translate("pes", None, None).await?;
    controller.shutdown().await;

    assert_eq!(result.origin, LookupOrigin::Offline);
    assert!(db_path.exists());
    Ok(())
}
