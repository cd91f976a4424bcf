//! Durable whole-file replacement and appends.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Replaces `path` with `contents` atomically.
///
/// Provides:
/// - **Atomicity**: readers see either the old or the new content, via tmp file + rename
/// - **Durability**: the tmp file is fsynced before the rename
///
/// Missing parent directories are created.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent(path)?;

    let tmp_path = temp_path(path)?;
    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(contents)?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}

/// Appends `contents` to `path` in a single write and fsyncs it.
///
/// The append is all-or-nothing: if the write or the fsync fails, the file
/// is truncated back to its previous length before the error is returned.
/// The file is created if it does not exist.
pub fn append_synced(path: &Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent(path)?;

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    append_or_rollback(&mut file, contents)
}

/// A file-like sink that can be measured, synced and cut back.
trait AppendTarget: Write {
    fn current_len(&self) -> io::Result<u64>;
    fn sync(&mut self) -> io::Result<()>;
    fn truncate_to(&mut self, len: u64) -> io::Result<()>;
}

impl AppendTarget for File {
    fn current_len(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn sync(&mut self) -> io::Result<()> {
        self.sync_all()
    }

    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)?;
        self.sync_all()
    }
}

fn append_or_rollback<T: AppendTarget>(target: &mut T, contents: &[u8]) -> io::Result<()> {
    let original_len = target.current_len()?;

    if let Err(e) = target.write_all(contents).and_then(|_| target.sync()) {
        // Best effort; the original error is the one worth reporting
        let _ = target.truncate_to(original_len);
        return Err(e);
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}

/// Gets a hidden sibling path (`.<name>.tmp`) for atomic writes.
fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "Path has no file name")
    })?;
    let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("marker.txt");

        write_atomic(&path, b"3\n").unwrap();
        write_atomic(&path, b"7\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "7\n");
        // No temp file left behind
        assert!(!temp_dir.path().join(".marker.txt.tmp").exists());
    }

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("marker.txt");

        write_atomic(&path, b"1").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_append_synced_preserves_existing_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.csv");

        append_synced(&path, b"a\n").unwrap();
        append_synced(&path, b"b\nc\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\n");
    }

    /// In-memory sink that accepts a limited number of bytes and can fail fsync.
    struct FlakySink {
        data: Vec<u8>,
        write_budget: Option<usize>,
        fail_sync: bool,
    }

    impl FlakySink {
        fn new(existing: &[u8]) -> Self {
            Self {
                data: existing.to_vec(),
                write_budget: None,
                fail_sync: false,
            }
        }
    }

    impl Write for FlakySink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = match self.write_budget {
                Some(0) => return Err(io::Error::other("no space left")),
                Some(budget) => budget.min(buf.len()),
                None => buf.len(),
            };
            self.data.extend_from_slice(&buf[..n]);
            if let Some(budget) = self.write_budget.as_mut() {
                *budget -= n;
            }
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl AppendTarget for FlakySink {
        fn current_len(&self) -> io::Result<u64> {
            Ok(self.data.len() as u64)
        }

        fn sync(&mut self) -> io::Result<()> {
            if self.fail_sync {
                Err(io::Error::other("fsync failed"))
            } else {
                Ok(())
            }
        }

        fn truncate_to(&mut self, len: u64) -> io::Result<()> {
            self.data.truncate(len as usize);
            Ok(())
        }
    }

    #[test]
    fn test_partial_write_is_rolled_back() {
        let mut sink = FlakySink::new(b"0, Zero, u0\n");
        sink.write_budget = Some(5);

        let result = append_or_rollback(&mut sink, b"1, One, u1\n2, Two, u2\n");

        assert!(result.is_err());
        assert_eq!(sink.data, b"0, Zero, u0\n");
    }

    #[test]
    fn test_failed_sync_is_rolled_back() {
        let mut sink = FlakySink::new(b"0, Zero, u0\n");
        sink.fail_sync = true;

        let result = append_or_rollback(&mut sink, b"1, One, u1\n");

        assert_eq!(result.unwrap_err().to_string(), "fsync failed");
        assert_eq!(sink.data, b"0, Zero, u0\n");
    }

    #[test]
    fn test_successful_append_keeps_new_bytes() {
        let mut sink = FlakySink::new(b"a\n");

        append_or_rollback(&mut sink, b"b\n").unwrap();

        assert_eq!(sink.data, b"a\nb\n");
    }
}
