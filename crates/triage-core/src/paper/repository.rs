//! Paper repository trait.

use super::model::PaperRecord;
use crate::error::Result;

/// An abstract source of paper records.
///
/// Implementations read the raw record stream, keep only accepted papers and
/// number them consecutively from 0 in stream order. The sequence must be the
/// same for the same input so that persisted indices stay meaningful across
/// runs.
pub trait PaperRepository {
    /// Loads every accepted paper, in stream order.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<PaperRecord>)`: Accepted papers with `index` set
    /// - `Err(TriageError)`: The stream could not be read or a record is malformed
    fn load_accepted(&self) -> Result<Vec<PaperRecord>>;
}
