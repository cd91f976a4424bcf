//! Crossterm implementation of the review terminal.

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use triage_core::config::KeyBindings;
use triage_core::error::{Result, TriageError};
use triage_core::review::{Command, Feedback, RecordView, ReviewTerminal, TerminalInput};

use crate::keymap::KeyMap;

/// Full-screen terminal for a review run.
///
/// Raw mode and the alternate screen are entered on construction and always
/// restored on drop, including on panic unwinding.
pub struct CrosstermTerminal {
    out: Stdout,
    keymap: KeyMap,
    hint: String,
    feedback_delay: Duration,
    notice: Option<String>,
}

impl CrosstermTerminal {
    pub fn enter(keys: &KeyBindings, feedback_delay: Duration) -> Result<Self> {
        let keymap = KeyMap::from_bindings(keys)?;

        enable_raw_mode().map_err(terminal_error)?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(terminal_error(e));
        }

        Ok(Self {
            out,
            keymap,
            hint: hint_line(keys),
            feedback_delay,
            notice: None,
        })
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        // Raw mode does not translate \n into \r\n
        for line in text.split('\n') {
            queue!(self.out, crossterm::style::Print(line), crossterm::style::Print("\r\n"))?;
        }
        Ok(())
    }

    fn draw(&mut self, view: &RecordView<'_>) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;

        if let Some(notice) = self.notice.take() {
            self.write_line(&notice.bright_black().to_string())?;
        }

        let header = format!("-----> PROGRESS {}/{} <-----", view.position, view.total);
        self.write_line(&header.bright_magenta().bold().to_string())?;
        if view.already_added {
            self.write_line(&"(already on your reading list)".yellow().to_string())?;
        }
        for (label, value) in record_fields(view) {
            self.write_line(&format!("{} {}", label.bright_cyan().bold(), value))?;
        }
        let hint = self.hint.clone();
        self.write_line(&hint.bright_black().to_string())?;

        self.out.flush()
    }
}

impl ReviewTerminal for CrosstermTerminal {
    fn notice(&mut self, message: &str) -> Result<()> {
        self.notice = Some(message.to_string());
        Ok(())
    }

    fn show(&mut self, view: &RecordView<'_>) -> Result<()> {
        self.draw(view).map_err(terminal_error)
    }

    fn read_input(&mut self) -> Result<TerminalInput> {
        loop {
            match event::read().map_err(terminal_error)? {
                Event::Key(key) => {
                    return Ok(match self.keymap.resolve(&key) {
                        Some(command) => TerminalInput::Command(command),
                        None => TerminalInput::Unrecognized,
                    });
                }
                Event::Resize(_, _) => return Ok(TerminalInput::Redraw),
                _ => {}
            }
        }
    }

    fn acknowledge(&mut self, feedback: Feedback) -> Result<()> {
        let banner = match feedback {
            Feedback::Added => feedback.banner().green().bold(),
            Feedback::Skipped => feedback.banner().yellow(),
        };
        self.write_line(&banner.to_string())
            .and_then(|_| self.out.flush())
            .map_err(terminal_error)?;
        thread::sleep(self.feedback_delay);
        Ok(())
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn terminal_error(e: io::Error) -> TriageError {
    TriageError::terminal(e.to_string())
}

/// Labelled fields of a record, in display order.
fn record_fields(view: &RecordView<'_>) -> Vec<(&'static str, String)> {
    let paper = view.paper;
    vec![
        ("TITLE:", paper.title.clone()),
        ("AUTHORS:", paper.authors_line()),
        ("TL;DR:", paper.summary_or_empty().to_string()),
        ("DECISION:", paper.decision.clone()),
        ("ABSTRACT:", paper.abstract_text.clone()),
    ]
}

/// The key hint shown under every record.
fn hint_line(keys: &KeyBindings) -> String {
    let parts: Vec<String> = Command::ALL
        .iter()
        .map(|&command| format!("[{}] {}", keys.primary(command), command.label()))
        .collect();
    format!("{}. Your progress is saved when you quit.", parts.join(". "))
}
