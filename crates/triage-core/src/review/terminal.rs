//! Terminal adapter trait.

use super::command::{Feedback, TerminalInput};
use crate::error::Result;
use crate::paper::PaperRecord;

/// What the terminal needs to draw one record.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    pub paper: &'a PaperRecord,
    /// Cursor of the paper on screen.
    pub position: usize,
    /// Number of accepted papers.
    pub total: usize,
    /// The paper is already on the reading list (persisted or pending).
    pub already_added: bool,
}

/// The review session's view of the terminal.
///
/// The session never draws anything itself. It asks the adapter to show a
/// record and then blocks on [`read_input`](Self::read_input) until the user
/// presses something. Implementations decide how commands map to keys.
pub trait ReviewTerminal {
    /// Shows a one-off informational message (e.g. "no progress detected").
    fn notice(&mut self, message: &str) -> Result<()>;

    /// Clears the screen and draws `view`.
    fn show(&mut self, view: &RecordView<'_>) -> Result<()>;

    /// Blocks until one input event is available.
    ///
    /// This is the only point where a session waits; there is no timeout.
    fn read_input(&mut self) -> Result<TerminalInput>;

    /// Briefly acknowledges an add/skip decision.
    fn acknowledge(&mut self, feedback: Feedback) -> Result<()>;
}
