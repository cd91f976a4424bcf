//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/paper-triage/config.toml by default).

use std::path::{Path, PathBuf};

use tracing::debug;
use triage_core::config::TriageConfig;
use triage_core::error::{Result, TriageError};

use crate::paths::TriagePaths;
use crate::storage::AtomicTomlFile;

/// Loads, validates and initializes `config.toml`.
pub struct ConfigService {
    file: AtomicTomlFile<TriageConfig>,
}

impl ConfigService {
    /// Creates a service for the default config path.
    pub fn new() -> Result<Self> {
        let path = TriagePaths::config_file().map_err(|e| TriageError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a service for a custom config path (CLI override, tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads the configuration, falling back to defaults when the file is
    /// missing or empty.
    ///
    /// An existing but invalid file is an error rather than a silent fallback.
    pub fn load(&self) -> Result<TriageConfig> {
        let config = match self.file.load()? {
            Some(config) => {
                debug!(path = %self.path().display(), "loaded config");
                config
            }
            None => {
                debug!(path = %self.path().display(), "no config file, using defaults");
                TriageConfig::default()
            }
        };
        validate(&config)?;
        Ok(config)
    }

    /// Writes the default configuration.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The file was written
    /// - `Ok(false)`: A file already exists and `force` was not set
    pub fn init(&self, force: bool) -> Result<bool> {
        let defaults = TriageConfig::default();
        if force {
            self.file.save(&defaults)?;
            Ok(true)
        } else {
            self.file.save_new(&defaults)
        }
    }
}

/// Checks invariants serde cannot express.
pub fn validate(config: &TriageConfig) -> Result<()> {
    if config.acceptance_marker.trim().is_empty() {
        return Err(TriageError::config("acceptance_marker must not be empty"));
    }
    if config.forum_url_base.trim().is_empty() {
        return Err(TriageError::config("forum_url_base must not be empty"));
    }

    let keys = &config.keys;
    for (name, bound) in [
        ("add", &keys.add),
        ("skip", &keys.skip),
        ("previous", &keys.previous),
        ("quit", &keys.quit),
    ] {
        if bound.iter().all(|k| k.trim().is_empty()) {
            return Err(TriageError::config(format!("no key bound to `{}`", name)));
        }
    }
    if let Some(key) = keys.find_conflict() {
        return Err(TriageError::config(format!(
            "key `{}` is bound to more than one command",
            key
        )));
    }
    Ok(())
}
