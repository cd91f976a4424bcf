//! Command types for review interaction.

use serde::{Deserialize, Serialize};

/// A recognized review command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Add the current paper to the reading list and move on.
    Add,
    /// Move on without adding.
    Skip,
    /// Re-show the previously shown paper.
    Previous,
    /// Stop reviewing; the current paper is shown again next run.
    Quit,
}

impl Command {
    pub const ALL: [Command; 4] = [Command::Add, Command::Skip, Command::Previous, Command::Quit];

    pub fn label(self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Skip => "skip",
            Command::Previous => "go back",
            Command::Quit => "quit",
        }
    }
}

/// One unit of input read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalInput {
    /// A key bound to a review command.
    Command(Command),
    /// The screen must be drawn again (e.g. after a resize).
    Redraw,
    /// Anything else; the session keeps waiting.
    Unrecognized,
}

/// Short acknowledgement shown after a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Added,
    Skipped,
}

impl Feedback {
    pub fn banner(self) -> &'static str {
        match self {
            Feedback::Added => "-------ADDED-------",
            Feedback::Skipped => "-------SKIPPED-------",
        }
    }
}
