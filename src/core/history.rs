//! # History Log
//!
//! Distinct previously submitted commands plus a recall cursor.
//!
//! The cursor counts back from the newest entry: `Some(0)` is the most recent
//! command, `None` means "not browsing". Navigation only moves the cursor; the
//! entries themselves change only on [`HistoryLog::record`].

#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command unless it is empty or already present, and stop
    /// browsing. Returns true if the entry was added.
    pub fn record(&mut self, command: &str) -> bool {
        self.cursor = None;
        if command.is_empty() || self.entries.iter().any(|e| e == command) {
            return false;
        }
        self.entries.push(command.to_string());
        true
    }

    /// Step toward older entries, stopping at the oldest.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(self.entries.len() - 1),
        };
        self.cursor = Some(next);
        self.current()
    }

    /// Step toward newer entries. Stepping past the newest stops browsing and
    /// returns `None`.
    pub fn newer(&mut self) -> Option<&str> {
        self.cursor = match self.cursor {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
        self.current()
    }

    /// Entry under the cursor.
    pub fn current(&self) -> Option<&str> {
        let i = self.cursor?;
        self.entries
            .get(self.entries.len().checked_sub(1 + i)?)
            .map(String::as_str)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
