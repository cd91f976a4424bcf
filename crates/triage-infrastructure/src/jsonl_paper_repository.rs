//! JSON Lines PaperRepository implementation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};
use triage_core::error::{Result, TriageError};
use triage_core::paper::{PaperRecord, PaperRepository};

use crate::dto::PaperMetadataDto;

/// Reads paper records from a JSON Lines metadata file.
///
/// Responsibilities:
/// - Parse one JSON object per line (blank lines are ignored)
/// - Keep records whose `decision` contains the acceptance marker
/// - Number accepted records consecutively from 0
///
/// Records that are not accepted are only checked for valid JSON and a
/// `decision` string; a missing `title`/`abstract`/`forum` is only an error
/// on records that would be reviewed.
pub struct JsonlPaperRepository {
    path: PathBuf,
    acceptance_marker: String,
}

impl JsonlPaperRepository {
    pub fn new(path: PathBuf, acceptance_marker: impl Into<String>) -> Self {
        Self {
            path,
            acceptance_marker: acceptance_marker.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_line(&self, line_no: usize, line: &str) -> Result<Option<PaperMetadataDto>> {
        let value: Value = serde_json::from_str(line)
            .map_err(|e| TriageError::invalid_record(line_no, e.to_string()))?;

        let decision = value
            .get("decision")
            .and_then(Value::as_str)
            .ok_or_else(|| TriageError::invalid_record(line_no, "missing field `decision`"))?;
        if !decision.contains(self.acceptance_marker.as_str()) {
            return Ok(None);
        }

        let dto: PaperMetadataDto = serde_json::from_value(value)
            .map_err(|e| TriageError::invalid_record(line_no, e.to_string()))?;
        Ok(Some(dto))
    }
}

impl PaperRepository for JsonlPaperRepository {
    fn load_accepted(&self) -> Result<Vec<PaperRecord>> {
        let file = File::open(&self.path).map_err(|e| {
            TriageError::io(format!(
                "Failed to open metadata file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let mut records = Vec::new();
        let mut total = 0usize;
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line_no = i + 1;
            let line = line.map_err(|e| TriageError::invalid_record(line_no, e.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            total += 1;

            if let Some(dto) = self.parse_line(line_no, &line)? {
                let index = records.len();
                records.push(dto.into_record(index));
            }
        }

        info!(
            path = %self.path.display(),
            total,
            accepted = records.len(),
            "loaded paper metadata"
        );
        debug!(marker = %self.acceptance_marker, "acceptance filter applied");
        Ok(records)
    }
}
