//! Atomic TOML file operations.
//!
//! Provides a thin typed layer over [`write_atomic`] for TOML documents.

use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use super::atomic_write::write_atomic;
use triage_core::error::{Result, TriageError};

/// A handle to a TOML file that is always replaced atomically.
///
/// Provides:
/// - **Atomicity**: Updates are all-or-nothing via tmp file + atomic rename
/// - **Consistency**: TOML schema validation on load/save
/// - **Durability**: Explicit fsync before rename
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new atomic TOML file handle.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the TOML file and deserializes it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = toml::from_str(&content).map_err(|e| {
            TriageError::config(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(Some(data))
    }

    /// Saves data to the TOML file atomically, replacing any previous content.
    pub fn save(&self, data: &T) -> Result<()> {
        let toml_string = toml::to_string_pretty(data)?;
        write_atomic(&self.path, toml_string.as_bytes())?;
        Ok(())
    }

    /// Saves data only if the file does not exist yet.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The file was created
    /// - `Ok(false)`: The file already existed and was left untouched
    pub fn save_new(&self, data: &T) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(data)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        name: String,
        count: u32,
    }

    fn sample() -> TestConfig {
        TestConfig {
            name: "test".to_string(),
            count: 42,
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let atomic_file = AtomicTomlFile::<TestConfig>::new(temp_dir.path().join("test.toml"));

        atomic_file.save(&sample()).unwrap();

        let loaded = atomic_file.load().unwrap().unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let atomic_file =
            AtomicTomlFile::<TestConfig>::new(temp_dir.path().join("nonexistent.toml"));

        assert!(atomic_file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "name = ").unwrap();
        let atomic_file = AtomicTomlFile::<TestConfig>::new(path);

        let err = atomic_file.load().unwrap_err();
        assert!(matches!(err, TriageError::Config(_)));
    }

    #[test]
    fn test_save_new_does_not_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let atomic_file = AtomicTomlFile::<TestConfig>::new(temp_dir.path().join("test.toml"));

        assert!(atomic_file.save_new(&sample()).unwrap());

        let other = TestConfig {
            name: "other".to_string(),
            count: 1,
        };
        assert!(!atomic_file.save_new(&other).unwrap());
        assert_eq!(atomic_file.load().unwrap().unwrap(), sample());
    }
}
