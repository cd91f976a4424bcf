//! Progress domain models.

use serde::{Deserialize, Serialize};

use crate::paper::PaperRecord;

/// One line of the persisted reading list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingListEntry {
    pub index: usize,
    pub title: String,
    pub url: String,
}

impl ReadingListEntry {
    /// Renders a reading-list entry for `paper`, building its URL from `forum_url_base`.
    pub fn from_record(paper: &PaperRecord, forum_url_base: &str) -> Self {
        Self {
            index: paper.index,
            title: paper.title.clone(),
            url: paper.forum_url(forum_url_base),
        }
    }

    /// Formats the entry as `<index>, <title>, <url>`.
    ///
    /// Line breaks inside the title are collapsed so the entry stays on one line.
    pub fn to_line(&self) -> String {
        let title = self
            .title
            .split(['\r', '\n'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        format!("{}, {}, {}", self.index, title, self.url)
    }

    /// Parses a line written by [`to_line`](Self::to_line).
    ///
    /// The title may itself contain commas, so the index is taken from the
    /// first field and the URL from the last one.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (index, rest) = line.split_once(',')?;
        let index = index.trim().parse().ok()?;
        let (title, url) = match rest.rsplit_once(',') {
            Some((title, url)) => (title.trim(), url.trim()),
            None => (rest.trim(), ""),
        };
        Some(Self {
            index,
            title: title.to_string(),
            url: url.to_string(),
        })
    }
}

/// Snapshot of persisted progress, read once at session start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    /// Indices of the persisted reading list, in file order.
    pub added: Vec<usize>,
    /// Cursor value at the end of the previous run.
    pub last_viewed: Option<usize>,
}

impl Progress {
    pub fn new(added: Vec<usize>, last_viewed: Option<usize>) -> Self {
        Self { added, last_viewed }
    }

    /// True when neither a reading list nor a marker was found.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.last_viewed.is_none()
    }

    /// Highest index ever added to the reading list.
    pub fn furthest_added(&self) -> Option<usize> {
        self.added.iter().copied().max()
    }

    /// Cursor a new run starts from.
    ///
    /// The furthest added record guarantees nothing already decided is shown
    /// again; the last-viewed marker additionally covers records that were
    /// skipped. The result never exceeds `n_papers`.
    pub fn resume_point(&self, n_papers: usize) -> usize {
        let after_added = self.furthest_added().map_or(0, |index| index + 1);
        let viewed = self.last_viewed.unwrap_or(0);
        after_added.max(viewed).min(n_papers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paper::sample;

    #[test]
    fn test_entry_from_record() {
        let entry = ReadingListEntry::from_record(&sample(4), "https://openreview.net");
        assert_eq!(entry.index, 4);
        assert_eq!(entry.title, "Paper 4");
        assert_eq!(entry.url, "https://openreview.net/forum?id=forum4");
        assert_eq!(
            entry.to_line(),
            "4, Paper 4, https://openreview.net/forum?id=forum4"
        );
    }

    #[test]
    fn test_to_line_collapses_newlines() {
        let entry = ReadingListEntry {
            index: 1,
            title: "Deep\n  Learning\r\nfor All".to_string(),
            url: "u".to_string(),
        };
        assert_eq!(entry.to_line(), "1, Deep Learning for All, u");
    }

    #[test]
    fn test_parse_line_with_commas_in_title() {
        let entry =
            ReadingListEntry::parse_line("12, Sparse, Fast, and Robust, https://x/forum?id=a")
                .unwrap();
        assert_eq!(entry.index, 12);
        assert_eq!(entry.title, "Sparse, Fast, and Robust");
        assert_eq!(entry.url, "https://x/forum?id=a");
    }

    #[test]
    fn test_parse_line_rejects_bad_index() {
        assert!(ReadingListEntry::parse_line("abc, title, url").is_none());
        assert!(ReadingListEntry::parse_line("no commas here").is_none());
        assert!(ReadingListEntry::parse_line("").is_none());
    }

    #[test]
    fn test_resume_point_without_progress() {
        let progress = Progress::default();
        assert!(progress.is_empty());
        assert_eq!(progress.resume_point(10), 0);
    }

    #[test]
    fn test_resume_point_uses_furthest_signal() {
        assert_eq!(Progress::new(vec![1, 4], None).resume_point(10), 5);
        assert_eq!(Progress::new(vec![1], Some(7)).resume_point(10), 7);
        assert_eq!(Progress::new(vec![8], Some(3)).resume_point(10), 9);
        assert_eq!(Progress::new(vec![], Some(0)).resume_point(10), 0);
    }

    #[test]
    fn test_resume_point_clamped_to_paper_count() {
        assert_eq!(Progress::new(vec![20], Some(25)).resume_point(10), 10);
    }
}
