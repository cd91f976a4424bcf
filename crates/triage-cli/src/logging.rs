//! Tracing subscriber setup.
//!
//! The review screen runs in raw mode, so logs go to a daily rolling file
//! (`paper-triage.log.YYYY-MM-DD`) instead of the terminal. `RUST_LOG`
//! overrides the default level.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use triage_infrastructure::TriagePaths;

const LOG_FILE_PREFIX: &str = "paper-triage.log";

/// Installs the global subscriber writing to the application log directory.
///
/// The returned guard flushes buffered lines when dropped and must live until
/// the process exits. Logging is silently disabled when the log directory
/// cannot be prepared.
pub fn init(verbose: bool) -> Option<WorkerGuard> {
    let logs_dir = TriagePaths::logs_dir().ok()?;
    let appender = file_appender(&logs_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init();

    Some(guard)
}

fn file_appender(logs_dir: &Path) -> Option<RollingFileAppender> {
    fs::create_dir_all(logs_dir).ok()?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(logs_dir)
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_file_appender_writes_dated_file() {
        let temp_dir = TempDir::new().unwrap();
        let logs_dir = temp_dir.path().join("logs");

        let mut appender = file_appender(&logs_dir).unwrap();
        appender.write_all(b"review started\n").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = fs::read_dir(&logs_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("paper-triage.log."));

        let content = fs::read_to_string(logs_dir.join(&names[0])).unwrap();
        assert_eq!(content, "review started\n");
    }
}
