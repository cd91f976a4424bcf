//! Review session module.
//!
//! The review session is the resumable state machine at the heart of the
//! application: it walks the accepted papers one at a time, records "add"
//! decisions in a run-scoped pending list and flushes them, together with the
//! cursor, to a [`ProgressStore`](crate::progress::ProgressStore) when the run
//! ends.
//!
//! # Module Structure
//!
//! - `command`: Logical commands and terminal input (`Command`, `TerminalInput`, `Feedback`)
//! - `terminal`: Terminal adapter trait (`ReviewTerminal`, `RecordView`)
//! - `session`: The state machine (`ReviewSession`, `SessionState`, `Step`)
//!
//! # Usage
//!
//! ```ignore
//! use triage_core::review::{ReviewSession, ReviewTerminal, SessionState};
//!
//! let mut session = ReviewSession::resume(&papers, &store.load());
//! let outcome = session.run(&mut terminal);
//! session.finalize(&store, &config.forum_url_base)?;
//! ```

mod command;
mod session;
mod terminal;


// Re-export public API
pub use command::{Command, Feedback, TerminalInput};
pub use session::{FinalizeReport, ReviewSession, SessionState, SessionStats, Step};
pub use terminal::{RecordView, ReviewTerminal};
