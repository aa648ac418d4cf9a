//! # Input Controller
//!
//! Owns the live input line and the [`HistoryLog`]. Turns key presses into
//! edits, history recall, tab completion, and on Enter a submitted command.
//! It never produces output lines itself.

use log::debug;

use crate::core::commands::{completion_names, normalize};
use crate::core::history::HistoryLog;

/// Keys the controller understands. The adapter maps terminal events onto
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    Backspace,
    Enter,
    Up,
    Down,
    Tab,
}

#[derive(Debug, Default)]
pub struct InputController {
    buffer: String,
    history: HistoryLog,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a key. Returns the raw submitted text on Enter, empty input
    /// included.
    pub fn handle_key(&mut self, key: InputKey) -> Option<String> {
        match key {
            InputKey::Char(c) => {
                self.buffer.push(c);
                None
            }
            InputKey::Backspace => {
                self.buffer.pop();
                None
            }
            InputKey::Enter => Some(self.submit()),
            InputKey::Up => {
                if let Some(entry) = self.history.older() {
                    self.buffer = entry.to_string();
                }
                None
            }
            InputKey::Down => {
                if self.history.is_browsing() {
                    self.buffer = self.history.newer().unwrap_or_default().to_string();
                }
                None
            }
            InputKey::Tab => {
                self.complete();
                None
            }
        }
    }

    fn submit(&mut self) -> String {
        let raw = std::mem::take(&mut self.buffer);
        if self.history.record(&normalize(&raw)) {
            debug!("History now has {} entries", self.history.entries().len());
        }
        raw
    }

    /// Replace the input with the only command name it prefixes, if exactly
    /// one matches.
    fn complete(&mut self) {
        let typed = self.buffer.to_lowercase();
        let mut matches = completion_names().filter(|name| name.starts_with(&typed));
        if let (Some(only), None) = (matches.next(), matches.next()) {
            self.buffer = only.to_string();
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut InputController, s: &str) {
        for c in s.chars() {
            input.handle_key(InputKey::Char(c));
        }
    }

    fn submit(input: &mut InputController, s: &str) -> Option<String> {
        type_str(input, s);
        input.handle_key(InputKey::Enter)
    }

    #[test]
    fn enter_submits_and_clears() {
        let mut input = InputController::new();
        assert_eq!(submit(&mut input, "Help "), Some("Help ".to_string()));
        assert_eq!(input.buffer(), "");
        assert_eq!(input.history().entries(), ["help"]);
    }

    #[test]
    fn empty_enter_still_submits_but_is_not_recorded() {
        let mut input = InputController::new();
        assert_eq!(input.handle_key(InputKey::Enter), Some(String::new()));
        assert!(input.history().entries().is_empty());
    }

    #[test]
    fn history_skips_duplicates() {
        let mut input = InputController::new();
        for c in ["help", "about", "help"] {
            submit(&mut input, c);
        }
        assert_eq!(input.history().entries(), ["help", "about"]);
    }

    #[test]
    fn up_and_down_recall_entries() {
        let mut input = InputController::new();
        for c in ["help", "about", "help"] {
            submit(&mut input, c);
        }

        input.handle_key(InputKey::Up);
        assert_eq!(input.buffer(), "about");
        input.handle_key(InputKey::Up);
        assert_eq!(input.buffer(), "help");
        input.handle_key(InputKey::Down);
        assert_eq!(input.buffer(), "about");
        input.handle_key(InputKey::Down);
        assert_eq!(input.buffer(), "");
        assert!(!input.history().is_browsing());
    }

    #[test]
    fn up_with_empty_history_keeps_input() {
        let mut input = InputController::new();
        type_str(&mut input, "ab");
        input.handle_key(InputKey::Up);
        assert_eq!(input.buffer(), "ab");
    }

    #[test]
    fn down_when_not_browsing_keeps_input() {
        let mut input = InputController::new();
        submit(&mut input, "help");
        type_str(&mut input, "ab");
        input.handle_key(InputKey::Down);
        assert_eq!(input.buffer(), "ab");
    }

    #[test]
    fn enter_resets_recall_cursor() {
        let mut input = InputController::new();
        submit(&mut input, "help");
        input.handle_key(InputKey::Up);
        input.handle_key(InputKey::Enter);
        assert!(!input.history().is_browsing());
    }

    #[test]
    fn tab_completes_unique_prefix() {
        let mut input = InputController::new();
        type_str(&mut input, "He");
        input.handle_key(InputKey::Tab);
        assert_eq!(input.buffer(), "help");
    }

    #[test]
    fn tab_with_ambiguous_or_no_match_changes_nothing() {
        let mut input = InputController::new();
        type_str(&mut input, "c");
        input.handle_key(InputKey::Tab);
        assert_eq!(input.buffer(), "c");

        input.handle_key(InputKey::Backspace);
        type_str(&mut input, "zzz");
        input.handle_key(InputKey::Tab);
        assert_eq!(input.buffer(), "zzz");

        // Empty input matches everything
        let mut empty = InputController::new();
        empty.handle_key(InputKey::Tab);
        assert_eq!(empty.buffer(), "");
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut input = InputController::new();
        type_str(&mut input, "ab✓");
        input.handle_key(InputKey::Backspace);
        assert_eq!(input.buffer(), "ab");
        input.handle_key(InputKey::Backspace);
        input.handle_key(InputKey::Backspace);
        input.handle_key(InputKey::Backspace);
        assert_eq!(input.buffer(), "");
    }
}
