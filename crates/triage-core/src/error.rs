//! Error types for the paper triage workspace.

use thiserror::Error;

/// A shared error type for the entire triage application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriageError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// A paper record could not be read from the record file
    #[error("Invalid record at line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Another process holds the progress lock
    #[error("Progress files are locked: {0}")]
    Locked(String),

    /// Writing progress at the end of a session failed
    #[error("Failed to persist progress: {0}")]
    Persist(String),

    /// Terminal input/output failure
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl TriageError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an InvalidRecord error for a 1-based line number
    pub fn invalid_record(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            line,
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Persist error
    pub fn persist(message: impl Into<String>) -> Self {
        Self::Persist(message.into())
    }

    /// Creates a Terminal error
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a lock contention error
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked(_))
    }

    /// Check if this error happened while persisting progress.
    ///
    /// IO errors count as well since the flat-file store surfaces them directly.
    pub fn is_persist(&self) -> bool {
        matches!(self, Self::Persist(_) | Self::Io { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TriageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for TriageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TriageError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for TriageError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TriageError>`.
pub type Result<T> = std::result::Result<T, TriageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion_keeps_kind() {
        let err: TriageError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(err, TriageError::Io { .. }));
        assert!(err.to_string().contains("PermissionDenied"));
    }

    #[test]
    fn test_invalid_record_display() {
        let err = TriageError::invalid_record(7, "missing field `title`");
        assert!(matches!(err, TriageError::InvalidRecord { line: 7, .. }));
        assert_eq!(
            err.to_string(),
            "Invalid record at line 7: missing field `title`"
        );
    }

    #[test]
    fn test_persist_predicate() {
        assert!(TriageError::persist("disk full").is_persist());
        assert!(TriageError::io("disk full").is_persist());
        assert!(!TriageError::config("bad").is_persist());
    }

    #[test]
    fn test_json_conversion() {
        let err: TriageError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, TriageError::Serialization { ref format, .. } if format == "JSON"));
    }
}
