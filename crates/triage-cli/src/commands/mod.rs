pub mod config;
pub mod list;
pub mod review;
pub mod status;

use anyhow::{Context, Result};
use triage_core::config::TriageConfig;
use triage_infrastructure::ConfigService;
use triage_infrastructure::config_service::validate;
use triage_infrastructure::{FlatFileProgressStore, JsonlPaperRepository};

use crate::GlobalArgs;

/// Picks the config service for `--config` or the platform default.
pub fn config_service(global: &GlobalArgs) -> Result<ConfigService> {
    match &global.config {
        Some(path) => Ok(ConfigService::with_path(path.clone())),
        None => ConfigService::new().context("Failed to resolve config path"),
    }
}

/// Loads the configuration and applies command-line path overrides.
pub fn load_config(global: &GlobalArgs) -> Result<TriageConfig> {
    let service = config_service(global)?;
    let mut config = service
        .load()
        .with_context(|| format!("Failed to load config from {}", service.path().display()))?;

    if let Some(path) = &global.metadata {
        config.metadata_file = path.clone();
    }
    if let Some(path) = &global.reading_list {
        config.reading_list_file = path.clone();
    }
    if let Some(path) = &global.last_viewed {
        config.last_viewed_file = path.clone();
    }

    validate(&config)?;
    Ok(config)
}

pub fn paper_repository(config: &TriageConfig) -> JsonlPaperRepository {
    JsonlPaperRepository::new(config.metadata_file.clone(), config.acceptance_marker.clone())
}

pub fn progress_store(config: &TriageConfig) -> FlatFileProgressStore {
    FlatFileProgressStore::from_config(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_replace_config_paths() {
        let temp_dir = TempDir::new().unwrap();
        let global = GlobalArgs {
            config: Some(temp_dir.path().join("missing.toml")),
            metadata: Some(PathBuf::from("papers.jsonl")),
            reading_list: Some(PathBuf::from("list.csv")),
            last_viewed: None,
            verbose: false,
        };

        let config = load_config(&global).unwrap();
        assert_eq!(config.metadata_file, PathBuf::from("papers.jsonl"));
        assert_eq!(config.reading_list_file, PathBuf::from("list.csv"));
        assert_eq!(
            config.last_viewed_file,
            TriageConfig::default().last_viewed_file
        );
    }

    #[test]
    fn test_invalid_config_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "save_retries = \"three\"\n").unwrap();
        let global = GlobalArgs {
            config: Some(path),
            ..GlobalArgs::default()
        };

        let err = load_config(&global).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load config"));
    }
}
