//! Advisory lock guarding the progress files of a review run.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use triage_core::error::{Result, TriageError};

/// A file lock guard that releases the lock when dropped.
///
/// The lock lives in a sibling `<name>.lock` file so the guarded file itself
/// can be replaced or appended to freely while the lock is held.
#[derive(Debug)]
pub struct FileLock {
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Tries to take an exclusive lock for `path` without blocking.
    ///
    /// Fails with [`TriageError::Locked`] if another process holds it.
    pub fn try_acquire(path: &Path) -> Result<Self> {
        let lock_path = lock_path_for(path);

        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.try_lock_exclusive().map_err(|e| {
            TriageError::Locked(format!(
                "{} is held by another review session ({})",
                lock_path.display(),
                e
            ))
        })?;

        Ok(FileLock { file, lock_path })
    }

    pub fn path(&self) -> &Path {
        &self.lock_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lock_path_is_sibling() {
        let lock = lock_path_for(Path::new("/tmp/x/reading_list.csv"));
        assert_eq!(lock, PathBuf::from("/tmp/x/reading_list.csv.lock"));
    }

    #[test]
    fn test_second_acquire_fails_while_held() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reading_list.csv");

        let first = FileLock::try_acquire(&path).unwrap();
        let second = FileLock::try_acquire(&path);
        assert!(matches!(second, Err(TriageError::Locked(_))));

        drop(first);
        assert!(FileLock::try_acquire(&path).is_ok());
    }
}
