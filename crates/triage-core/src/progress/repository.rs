//! Progress store trait.

use super::model::{Progress, ReadingListEntry};
use crate::error::Result;

/// Durable storage for review progress across runs.
///
/// The review session only needs three operations, so the two flat files of
/// the default implementation can be swapped for any other key-value store
/// without touching the session.
///
/// # Implementation Notes
///
/// - `load` must never fail because progress is missing; absent or unreadable
///   values are reported as an empty [`Progress`].
/// - `append_reading_list` must be all-or-nothing for the given batch and
///   must never rewrite entries written by earlier runs.
/// - `save_last_viewed` overwrites the previous marker.
pub trait ProgressStore {
    /// Reads the persisted reading-list indices and last-viewed marker.
    fn load(&self) -> Progress;

    /// Appends entries to the persisted reading list, preserving their order.
    ///
    /// An empty slice is a no-op.
    fn append_reading_list(&self, entries: &[ReadingListEntry]) -> Result<()>;

    /// Overwrites the last-viewed marker.
    fn save_last_viewed(&self, cursor: usize) -> Result<()>;
}
