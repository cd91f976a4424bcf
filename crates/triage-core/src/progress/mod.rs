//! Progress domain module.
//!
//! Persisted review progress: the append-only reading list and the
//! last-viewed marker, plus the store interface that hides how they are kept.

mod model;
mod repository;

pub use model::{Progress, ReadingListEntry};
pub use repository::ProgressStore;
