//! Paper record domain model.

use serde::{Deserialize, Serialize};

/// A single accepted paper, as presented to the reviewer.
///
/// Records are produced once by a [`PaperRepository`](super::PaperRepository)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    /// Position in the filtered accepted-paper sequence (0-based).
    pub index: usize,
    pub title: String,
    /// Author names. An absent list is stored as empty.
    pub authors: Vec<String>,
    /// Optional one-line summary (TL;DR).
    pub summary: Option<String>,
    pub decision: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// External identifier used to build the forum URL.
    pub forum_id: String,
}

impl PaperRecord {
    /// Builds the canonical forum URL for this paper.
    ///
    /// A trailing slash on `base` is tolerated.
    pub fn forum_url(&self, base: &str) -> String {
        format!("{}/forum?id={}", base.trim_end_matches('/'), self.forum_id)
    }

    /// Authors joined for display.
    pub fn authors_line(&self) -> String {
        self.authors.join(", ")
    }

    /// The summary, or an empty placeholder when the record has none.
    pub fn summary_or_empty(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
pub(crate) fn sample(index: usize) -> PaperRecord {
    PaperRecord {
        index,
        title: format!("Paper {}", index),
        authors: vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()],
        summary: None,
        decision: "Accept (Poster)".to_string(),
        abstract_text: format!("Abstract of paper {}", index),
        forum_id: format!("forum{}", index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forum_url() {
        let paper = sample(3);
        assert_eq!(
            paper.forum_url("https://openreview.net"),
            "https://openreview.net/forum?id=forum3"
        );
        assert_eq!(
            paper.forum_url("https://openreview.net/"),
            "https://openreview.net/forum?id=forum3"
        );
    }

    #[test]
    fn test_missing_summary_is_empty_placeholder() {
        let mut paper = sample(0);
        assert_eq!(paper.summary_or_empty(), "");
        paper.summary = Some("Short version".to_string());
        assert_eq!(paper.summary_or_empty(), "Short version");
    }

    #[test]
    fn test_authors_line() {
        let mut paper = sample(0);
        assert_eq!(paper.authors_line(), "Ada Lovelace, Alan Turing");
        paper.authors.clear();
        assert_eq!(paper.authors_line(), "");
    }
}
