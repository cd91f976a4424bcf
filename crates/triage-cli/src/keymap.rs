//! Resolves configured key names to crossterm key events.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use triage_core::config::KeyBindings;
use triage_core::error::{Result, TriageError};
use triage_core::review::Command;

/// Lookup table from key codes to review commands.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<KeyCode, Command>,
}

impl KeyMap {
    pub fn from_bindings(keys: &KeyBindings) -> Result<Self> {
        let mut bindings = HashMap::new();
        for (command, name) in keys.iter() {
            let code = parse_key(name)?;
            if let Some(existing) = bindings.insert(code, command) {
                if existing != command {
                    return Err(TriageError::config(format!(
                        "key `{}` is bound to both {} and {}",
                        name,
                        existing.label(),
                        command.label()
                    )));
                }
            }
        }
        Ok(Self { bindings })
    }

    /// Maps a key event to a command.
    ///
    /// Ctrl-C always quits, since raw mode swallows the signal.
    pub fn resolve(&self, key: &KeyEvent) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Command::Quit),
                _ => None,
            };
        }
        self.bindings.get(&key.code).copied()
    }
}

/// Parses a key name such as `"right"`, `"esc"` or `"q"`.
pub fn parse_key(name: &str) -> Result<KeyCode> {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let code = match trimmed.to_ascii_lowercase().as_str() {
        "right" => KeyCode::Right,
        "left" => KeyCode::Left,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "backspace" => KeyCode::Backspace,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        _ => {
            return Err(TriageError::config(format!("unknown key name `{}`", name)));
        }
    };
    Ok(code)
}
