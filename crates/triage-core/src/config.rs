//! Application configuration model.
//!
//! Loading and saving live in `triage-infrastructure`; this module only
//! defines the shape of `config.toml` and its defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::review::Command;

pub const DEFAULT_METADATA_FILE: &str = "iclr19_metadata.json";
pub const DEFAULT_READING_LIST_FILE: &str = "reading_list.csv";
pub const DEFAULT_LAST_VIEWED_FILE: &str = "last_viewed.txt";
pub const DEFAULT_ACCEPTANCE_MARKER: &str = "Accept";
pub const DEFAULT_FORUM_URL_BASE: &str = "https://openreview.net";

/// Root configuration read from `config.toml`.
///
/// Every field is optional in the file; missing fields fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// JSON Lines file with one paper record per line.
    pub metadata_file: PathBuf,
    /// Append-only reading list (`<index>, <title>, <url>` per line).
    pub reading_list_file: PathBuf,
    /// Single-integer file holding the cursor of the previous run.
    pub last_viewed_file: PathBuf,
    /// Substring of `decision` that makes a record eligible for review.
    pub acceptance_marker: String,
    /// Base of the forum URL written to the reading list.
    pub forum_url_base: String,
    /// How long the ADDED/SKIPPED acknowledgement stays on screen.
    pub feedback_delay_ms: u64,
    /// Extra attempts at flushing progress before giving up.
    pub save_retries: u32,
    pub keys: KeyBindings,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            metadata_file: PathBuf::from(DEFAULT_METADATA_FILE),
            reading_list_file: PathBuf::from(DEFAULT_READING_LIST_FILE),
            last_viewed_file: PathBuf::from(DEFAULT_LAST_VIEWED_FILE),
            acceptance_marker: DEFAULT_ACCEPTANCE_MARKER.to_string(),
            forum_url_base: DEFAULT_FORUM_URL_BASE.to_string(),
            feedback_delay_ms: 200,
            save_retries: 3,
            keys: KeyBindings::default(),
        }
    }
}

/// Key names bound to each review command.
///
/// Names are either a single character (`"a"`) or a named key such as
/// `"right"`, `"left"`, `"up"`, `"down"`, `"backspace"`, `"enter"`, `"esc"`,
/// `"space"` or `"tab"`. The terminal adapter resolves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub add: Vec<String>,
    pub skip: Vec<String>,
    pub previous: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        fn names(keys: &[&str]) -> Vec<String> {
            keys.iter().map(|k| k.to_string()).collect()
        }

        Self {
            add: names(&["right", "a"]),
            skip: names(&["left", "s"]),
            previous: names(&["up", "b", "backspace"]),
            quit: names(&["q", "esc"]),
        }
    }
}

impl KeyBindings {
    /// Iterates over `(command, key name)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Command, &str)> + '_ {
        group(Command::Add, &self.add)
            .chain(group(Command::Skip, &self.skip))
            .chain(group(Command::Previous, &self.previous))
            .chain(group(Command::Quit, &self.quit))
    }

    /// Returns the first key name that is bound to more than one command.
    pub fn find_conflict(&self) -> Option<&str> {
        let mut seen: Vec<(&str, Command)> = Vec::new();
        for (command, key) in self.iter() {
            let normalized = key.trim();
            if let Some((_, other)) = seen.iter().find(|(k, _)| *k == normalized) {
                if *other != command {
                    return Some(key);
                }
            }
            seen.push((normalized, command));
        }
        None
    }

    /// The first key of each command, for the on-screen hint line.
    pub fn primary(&self, command: Command) -> &str {
        let keys = match command {
            Command::Add => &self.add,
            Command::Skip => &self.skip,
            Command::Previous => &self.previous,
            Command::Quit => &self.quit,
        };
        keys.first().map(String::as_str).unwrap_or("?")
    }
}

fn group(command: Command, keys: &[String]) -> impl Iterator<Item = (Command, &str)> + '_ {
    keys.iter().map(move |k| (command, k.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TriageConfig::default();
        assert_eq!(config.metadata_file, PathBuf::from("iclr19_metadata.json"));
        assert_eq!(config.reading_list_file, PathBuf::from("reading_list.csv"));
        assert_eq!(config.acceptance_marker, "Accept");
        assert_eq!(config.feedback_delay_ms, 200);
        assert_eq!(config.save_retries, 3);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: TriageConfig = toml::from_str(
            r#"
acceptance_marker = "Oral"

[keys]
quit = ["x"]
"#,
        )
        .unwrap();
        assert_eq!(config.acceptance_marker, "Oral");
        assert_eq!(config.forum_url_base, DEFAULT_FORUM_URL_BASE);
        assert_eq!(config.keys.quit, vec!["x".to_string()]);
        assert_eq!(config.keys.add, KeyBindings::default().add);
    }

    #[test]
    fn test_default_bindings_have_no_conflict() {
        assert_eq!(KeyBindings::default().find_conflict(), None);
    }

    #[test]
    fn test_conflicting_binding_detected() {
        let keys = KeyBindings {
            add: vec!["a".to_string()],
            skip: vec![" a ".to_string()],
            ..KeyBindings::default()
        };
        assert_eq!(keys.find_conflict(), Some(" a "));
    }

    #[test]
    fn test_primary_key() {
        let keys = KeyBindings::default();
        assert_eq!(keys.primary(Command::Add), "right");
        assert_eq!(keys.primary(Command::Quit), "q");
    }
}
