//! Unified path management for paper-triage files.
//!
//! Review data (record file, reading list, marker) is resolved relative to the
//! working directory by default, as configured in `config.toml`. Only the
//! configuration file and logs live in platform directories.

use std::path::PathBuf;

const APP_DIR: &str = "paper-triage";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for paper-triage.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/paper-triage/          # Config directory
/// └── config.toml                  # Application configuration
///
/// ~/.local/share/paper-triage/     # Data directory
/// └── logs/
///     └── paper-triage.log.YYYY-MM-DD
/// ```
pub struct TriagePaths;

impl TriagePaths {
    /// Returns the configuration directory (e.g., `~/.config/paper-triage/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the data directory (e.g., `~/.local/share/paper-triage/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = TriagePaths::config_dir().unwrap();
        assert!(config_dir.ends_with("paper-triage"));
    }

    #[test]
    fn test_config_file() {
        let config_file = TriagePaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        // Verify it's under config_dir
        let config_dir = TriagePaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_logs_dir() {
        let logs_dir = TriagePaths::logs_dir().unwrap();
        assert!(logs_dir.ends_with("logs"));
        // Verify it's under data_dir
        let data_dir = TriagePaths::data_dir().unwrap();
        assert!(logs_dir.starts_with(&data_dir));
    }
}
