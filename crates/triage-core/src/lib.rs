pub mod config;
pub mod error;
pub mod paper;
pub mod progress;
pub mod review;

// Re-export common error type
pub use error::TriageError;

pub use config::{KeyBindings, TriageConfig};
pub use paper::{PaperRecord, PaperRepository};
pub use progress::{Progress, ProgressStore, ReadingListEntry};
pub use review::{Command, ReviewSession, ReviewTerminal, SessionState};
