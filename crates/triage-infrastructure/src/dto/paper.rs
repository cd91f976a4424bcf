//! Paper metadata DTOs.

use serde::Deserialize;
use triage_core::paper::PaperRecord;

/// One line of the metadata stream.
///
/// Unknown fields (review ratings and the like) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PaperMetadataDto {
    /// Forum identifier of the paper.
    pub forum: String,
    pub decision: String,
    pub submission_content: SubmissionContentDto,
}

/// The `submission_content` object of a metadata line.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionContentDto {
    pub title: String,
    /// `null`, absent and `[]` all mean "no authors".
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(rename = "TL;DR", default)]
    pub tldr: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl PaperMetadataDto {
    /// Converts to the domain model at position `index` of the accepted sequence.
    pub fn into_record(self, index: usize) -> PaperRecord {
        let content = self.submission_content;
        PaperRecord {
            index,
            title: content.title,
            authors: content.authors.unwrap_or_default(),
            summary: content.tldr.filter(|s| !s.trim().is_empty()),
            decision: self.decision,
            abstract_text: content.abstract_text,
            forum_id: self.forum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line() {
        let dto: PaperMetadataDto = serde_json::from_str(
            r#"{
                "forum": "B1x",
                "review_ratings": ["7: Good paper, accept"],
                "decision": "Accept (Poster)",
                "submission_content": {
                    "title": "A Title",
                    "authors": ["A", "B"],
                    "TL;DR": "Short.",
                    "abstract": "Long.",
                    "keywords": ["x"]
                }
            }"#,
        )
        .unwrap();

        let record = dto.into_record(5);
        assert_eq!(record.index, 5);
        assert_eq!(record.title, "A Title");
        assert_eq!(record.authors, vec!["A", "B"]);
        assert_eq!(record.summary.as_deref(), Some("Short."));
        assert_eq!(record.abstract_text, "Long.");
        assert_eq!(record.forum_id, "B1x");
    }

    #[test]
    fn test_absent_and_null_authors_are_empty() {
        for authors in ["", r#""authors": null,"#, r#""authors": [],"#] {
            let line = format!(
                r#"{{"forum": "f", "decision": "Accept", "submission_content": {{{} "title": "t", "abstract": "a"}}}}"#,
                authors
            );
            let dto: PaperMetadataDto = serde_json::from_str(&line).unwrap();
            assert!(dto.into_record(0).authors.is_empty(), "case: {}", authors);
        }
    }

    #[test]
    fn test_blank_tldr_is_none() {
        let dto: PaperMetadataDto = serde_json::from_str(
            r#"{"forum": "f", "decision": "Accept", "submission_content": {"title": "t", "abstract": "a", "TL;DR": "  "}}"#,
        )
        .unwrap();
        assert!(dto.into_record(0).summary.is_none());
    }

    #[test]
    fn test_missing_abstract_is_error() {
        let result = serde_json::from_str::<PaperMetadataDto>(
            r#"{"forum": "f", "decision": "Accept", "submission_content": {"title": "t"}}"#,
        );
        assert!(result.is_err());
    }
}
