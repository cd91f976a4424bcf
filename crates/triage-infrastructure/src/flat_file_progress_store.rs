//! Flat-file ProgressStore implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use triage_core::config::TriageConfig;
use triage_core::error::{Result, TriageError};
use triage_core::progress::{Progress, ProgressStore, ReadingListEntry};

use crate::storage::{FileLock, append_synced, write_atomic};

/// Keeps progress in two small text files.
///
/// - reading list: `<index>, <title>, <url>` per line, append-only
/// - last-viewed marker: a single integer, replaced atomically
///
/// Missing or unreadable files are reported as "no progress" by [`load`];
/// lines that do not start with an integer index are skipped with a warning.
///
/// [`load`]: ProgressStore::load
pub struct FlatFileProgressStore {
    reading_list: PathBuf,
    last_viewed: PathBuf,
}

impl FlatFileProgressStore {
    pub fn new(reading_list: PathBuf, last_viewed: PathBuf) -> Self {
        Self {
            reading_list,
            last_viewed,
        }
    }

    pub fn from_config(config: &TriageConfig) -> Self {
        Self::new(
            config.reading_list_file.clone(),
            config.last_viewed_file.clone(),
        )
    }

    pub fn reading_list_path(&self) -> &Path {
        &self.reading_list
    }

    pub fn last_viewed_path(&self) -> &Path {
        &self.last_viewed
    }

    /// Takes the single-writer lock for a review run.
    pub fn lock(&self) -> Result<FileLock> {
        FileLock::try_acquire(&self.reading_list)
    }

    /// Reads every well-formed reading-list entry, in file order.
    ///
    /// A missing file yields an empty list; other read failures are errors.
    pub fn read_entries(&self) -> Result<Vec<ReadingListEntry>> {
        let content = match read_optional(&self.reading_list)? {
            Some(content) => content,
            None => return Ok(Vec::new()),
        };

        let mut entries = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match ReadingListEntry::parse_line(line) {
                Some(entry) => entries.push(entry),
                None => warn!(
                    path = %self.reading_list.display(),
                    line = i + 1,
                    "skipping malformed reading-list line"
                ),
            }
        }
        Ok(entries)
    }

    /// Reads the last-viewed marker; `None` when absent or not an integer.
    pub fn read_last_viewed(&self) -> Result<Option<usize>> {
        let content = match read_optional(&self.last_viewed)? {
            Some(content) => content,
            None => return Ok(None),
        };

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse() {
            Ok(cursor) => Ok(Some(cursor)),
            Err(_) => {
                warn!(
                    path = %self.last_viewed.display(),
                    content = %trimmed,
                    "ignoring malformed last-viewed marker"
                );
                Ok(None)
            }
        }
    }
}

impl ProgressStore for FlatFileProgressStore {
    fn load(&self) -> Progress {
        let added = match self.read_entries() {
            Ok(entries) => entries.into_iter().map(|e| e.index).collect(),
            Err(e) => {
                warn!(error = %e, "reading list unreadable, treating as no progress");
                Vec::new()
            }
        };
        let last_viewed = match self.read_last_viewed() {
            Ok(marker) => marker,
            Err(e) => {
                warn!(error = %e, "last-viewed marker unreadable, treating as no progress");
                None
            }
        };

        debug!(added = added.len(), ?last_viewed, "progress loaded");
        Progress::new(added, last_viewed)
    }

    fn append_reading_list(&self, entries: &[ReadingListEntry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut batch = String::new();
        for entry in entries {
            batch.push_str(&entry.to_line());
            batch.push('\n');
        }

        // A file whose last line lacks a newline would glue the first new entry onto it
        if needs_leading_newline(&self.reading_list)? {
            batch.insert(0, '\n');
        }

        append_synced(&self.reading_list, batch.as_bytes()).map_err(|e| {
            TriageError::persist(format!(
                "append to {} failed: {}",
                self.reading_list.display(),
                e
            ))
        })
    }

    fn save_last_viewed(&self, cursor: usize) -> Result<()> {
        write_atomic(&self.last_viewed, format!("{}\n", cursor).as_bytes()).map_err(|e| {
            TriageError::persist(format!(
                "write of {} failed: {}",
                self.last_viewed.display(),
                e
            ))
        })
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(TriageError::io(format!("{}: {}", path.display(), e))),
    }
}

fn needs_leading_newline(path: &Path) -> Result<bool> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes.last().is_some_and(|&b| b != b'\n')),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(TriageError::persist(format!("{}: {}", path.display(), e))),
    }
}
