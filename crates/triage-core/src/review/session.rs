//! The review session state machine.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::command::{Command, Feedback, TerminalInput};
use super::terminal::{RecordView, ReviewTerminal};
use crate::error::Result;
use crate::paper::PaperRecord;
use crate::progress::{Progress, ProgressStore, ReadingListEntry};

/// Lifecycle state of a review session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A paper is under review (`cursor < n_papers`).
    Running,
    /// Every paper has been reviewed (`cursor == n_papers`).
    Exhausted,
    /// The user quit.
    Terminated,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionState::Running)
    }
}

/// Result of applying a single command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The paper was appended to the pending list.
    Added(usize),
    /// The paper was already on the reading list; only the cursor moved.
    AlreadyAdded(usize),
    Skipped(usize),
    SteppedBack { from: usize, to: usize },
    Quit(usize),
    /// The session had already ended; nothing changed.
    Ignored,
}

/// Counters for the current run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub shown: usize,
    pub added: usize,
    pub skipped: usize,
    pub back_steps: usize,
}

/// What a completed finalization wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalizeReport {
    /// Reading-list lines appended by this run.
    pub appended: usize,
    /// Value written to the last-viewed marker.
    pub last_viewed: usize,
}

/// A single resumable pass over the accepted papers.
///
/// The session owns the cursor and the run-scoped pending list. Persisted
/// progress is only read at construction and only written by
/// [`finalize`](Self::finalize).
#[derive(Debug)]
pub struct ReviewSession<'a> {
    papers: &'a [PaperRecord],
    /// Indices already on the persisted reading list (including ones flushed by this run).
    persisted: HashSet<usize>,
    start_cursor: usize,
    cursor: usize,
    pending: Vec<usize>,
    state: SessionState,
    stats: SessionStats,
    fresh_start: bool,
    flushed: usize,
    marker_saved: bool,
}

impl<'a> ReviewSession<'a> {
    /// Starts a session at the resume point derived from `progress`.
    pub fn resume(papers: &'a [PaperRecord], progress: &Progress) -> Self {
        let start_cursor = progress.resume_point(papers.len());
        let state = if start_cursor >= papers.len() {
            SessionState::Exhausted
        } else {
            SessionState::Running
        };

        info!(
            n_papers = papers.len(),
            start_cursor,
            persisted = progress.added.len(),
            last_viewed = ?progress.last_viewed,
            "review session resumed"
        );

        Self {
            papers,
            persisted: progress.added.iter().copied().collect(),
            start_cursor,
            cursor: start_cursor,
            pending: Vec::new(),
            state,
            stats: SessionStats::default(),
            fresh_start: progress.is_empty(),
            flushed: 0,
            marker_saved: false,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn start_cursor(&self) -> usize {
        self.start_cursor
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Indices added during this run that have not been flushed yet.
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    /// The paper under the cursor, if the session is still running.
    pub fn current(&self) -> Option<&'a PaperRecord> {
        match self.state {
            SessionState::Running => self.papers.get(self.cursor),
            _ => None,
        }
    }

    /// True when `index` is on the reading list or pending for it.
    pub fn is_added(&self, index: usize) -> bool {
        self.persisted.contains(&index) || self.pending.contains(&index)
    }

    /// Applies one command to the state machine.
    pub fn apply(&mut self, command: Command) -> Step {
        if self.state != SessionState::Running {
            debug!(?command, state = ?self.state, "command ignored after session end");
            return Step::Ignored;
        }

        let index = self.cursor;
        let step = match command {
            Command::Add => {
                self.cursor += 1;
                if self.is_added(index) {
                    Step::AlreadyAdded(index)
                } else {
                    self.pending.push(index);
                    self.stats.added += 1;
                    Step::Added(index)
                }
            }
            Command::Skip => {
                self.cursor += 1;
                self.stats.skipped += 1;
                Step::Skipped(index)
            }
            Command::Previous => {
                self.cursor = index.saturating_sub(1);
                self.stats.back_steps += 1;
                Step::SteppedBack {
                    from: index,
                    to: self.cursor,
                }
            }
            Command::Quit => {
                self.state = SessionState::Terminated;
                Step::Quit(index)
            }
        };

        if self.state == SessionState::Running && self.cursor >= self.papers.len() {
            self.cursor = self.papers.len();
            self.state = SessionState::Exhausted;
        }

        debug!(?command, ?step, cursor = self.cursor, state = ?self.state, "review step");
        step
    }

    /// Drives the session through `terminal` until it is exhausted or the user quits.
    ///
    /// On a terminal error the session stops where it is and the error is
    /// returned; the pending list and cursor are kept so the caller can still
    /// [`finalize`](Self::finalize).
    pub fn run<T: ReviewTerminal + ?Sized>(&mut self, terminal: &mut T) -> Result<SessionState> {
        if self.fresh_start {
            terminal.notice("No progress detected. Starting from the beginning")?;
            self.fresh_start = false;
        }

        while let Some(paper) = self.current() {
            let view = RecordView {
                paper,
                position: self.cursor,
                total: self.papers.len(),
                already_added: self.is_added(paper.index),
            };
            terminal.show(&view)?;
            self.stats.shown += 1;

            let command = loop {
                match terminal.read_input()? {
                    TerminalInput::Command(command) => break command,
                    TerminalInput::Redraw => terminal.show(&view)?,
                    TerminalInput::Unrecognized => {}
                }
            };

            match self.apply(command) {
                Step::Added(_) | Step::AlreadyAdded(_) => terminal.acknowledge(Feedback::Added)?,
                Step::Skipped(_) => terminal.acknowledge(Feedback::Skipped)?,
                _ => {}
            }
        }

        info!(
            state = ?self.state,
            cursor = self.cursor,
            pending = self.pending.len(),
            "review loop finished"
        );
        Ok(self.state)
    }

    /// Reading-list entries that have not been written yet.
    pub fn unflushed_entries(&self, forum_url_base: &str) -> Vec<ReadingListEntry> {
        self.pending
            .iter()
            .filter_map(|&index| self.papers.get(index))
            .map(|paper| ReadingListEntry::from_record(paper, forum_url_base))
            .collect()
    }

    /// Flushes the pending list and the cursor to `store`.
    ///
    /// Finalization is staged so it can be retried after a failure: once the
    /// reading-list append succeeds the pending list is cleared, and a later
    /// call only retries the marker. Nothing in memory is dropped while a
    /// stage keeps failing.
    pub fn finalize<S: ProgressStore + ?Sized>(
        &mut self,
        store: &S,
        forum_url_base: &str,
    ) -> Result<FinalizeReport> {
        if !self.pending.is_empty() {
            let entries = self.unflushed_entries(forum_url_base);
            if let Err(e) = store.append_reading_list(&entries) {
                warn!(pending = entries.len(), error = %e, "failed to append reading list");
                return Err(e);
            }
            self.flushed += entries.len();
            self.persisted.extend(self.pending.drain(..));
            info!(appended = entries.len(), "reading list appended");
        }

        if !self.marker_saved {
            if let Err(e) = store.save_last_viewed(self.cursor) {
                warn!(cursor = self.cursor, error = %e, "failed to save last-viewed marker");
                return Err(e);
            }
            self.marker_saved = true;
            info!(cursor = self.cursor, "last-viewed marker saved");
        }

        Ok(FinalizeReport {
            appended: self.flushed,
            last_viewed: self.cursor,
        })
    }
}
