//! # Output Buffer
//!
//! Completed lines, the queue of lines waiting to be typed, and at most one
//! active line in between:
//!
//! ```text
//! completed: [A, B]   active: Some(C)   pending: [D, E]
//!                          ▲
//!                typed by the renderer; on completion C moves to
//!                `completed` and D becomes active
//! ```
//!
//! The buffer holds no timers. Whoever calls [`OutputBuffer::submit`] or
//! [`OutputBuffer::complete_active`] is responsible for starting a renderer
//! on the newly active line.

use std::collections::VecDeque;

use crate::core::line::Line;

#[derive(Debug, Default)]
pub struct OutputBuffer {
    completed: Vec<Line>,
    pending: VecDeque<Line>,
    active: Option<Line>,
    /// Bumped on every reset
    generation: u64,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue lines for display, in order, behind anything already queued.
    ///
    /// Returns `true` if the buffer was idle and a line has just become
    /// active.
    pub fn submit(&mut self, lines: impl IntoIterator<Item = Line>) -> bool {
        self.pending.extend(lines);
        if self.active.is_none() {
            self.active = self.pending.pop_front();
            return self.active.is_some();
        }
        false
    }

    /// Commit the active line to history and promote the next queued line.
    /// Returns the new active line, or `None` once the buffer is idle.
    pub fn complete_active(&mut self) -> Option<&Line> {
        let finished = self.active.take()?;
        self.completed.push(finished);
        self.active = self.pending.pop_front();
        self.active.as_ref()
    }

    /// Drop completed lines, the queue, and the active line.
    pub fn reset(&mut self) {
        self.completed.clear();
        self.pending.clear();
        self.active = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Changes whenever the buffer is reset, even if new lines have been
    /// completed since.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn completed(&self) -> &[Line] {
        &self.completed
    }

    pub fn pending(&self) -> impl ExactSizeIterator<Item = &Line> {
        self.pending.iter()
    }

    pub fn active(&self) -> Option<&Line> {
        self.active.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(Line::text).collect()
    }

    #[test]
    fn submit_while_idle_activates_first_line() {
        let mut buf = OutputBuffer::new();
        let started = buf.submit([Line::output("A"), Line::output("B"), Line::output("C")]);

        assert!(started);
        assert_eq!(buf.active().map(Line::text), Some("A"));
        assert_eq!(buf.pending().map(Line::text).collect::<Vec<_>>(), vec!["B", "C"]);
        assert!(buf.completed().is_empty());
    }

    #[test]
    fn lines_complete_in_submitted_order() {
        let mut buf = OutputBuffer::new();
        buf.submit([Line::output("A"), Line::output("B"), Line::output("C")]);

        assert_eq!(buf.complete_active().map(Line::text), Some("B"));
        assert_eq!(buf.complete_active().map(Line::text), Some("C"));
        assert_eq!(buf.complete_active(), None);

        assert!(buf.is_idle());
        assert_eq!(texts(buf.completed()), vec!["A", "B", "C"]);
        assert_eq!(buf.pending().len(), 0);
    }

    #[test]
    fn submit_while_busy_appends_without_interrupting() {
        let mut buf = OutputBuffer::new();
        buf.submit([Line::output("A"), Line::output("B")]);

        let started = buf.submit([Line::output("X")]);
        assert!(!started);
        assert_eq!(buf.active().map(Line::text), Some("A"));
        assert_eq!(buf.pending().map(Line::text).collect::<Vec<_>>(), vec!["B", "X"]);
    }

    #[test]
    fn submit_nothing_while_idle_stays_idle() {
        let mut buf = OutputBuffer::new();
        assert!(!buf.submit(Vec::new()));
        assert!(buf.is_idle());
    }

    #[test]
    fn complete_while_idle_is_noop() {
        let mut buf = OutputBuffer::new();
        assert_eq!(buf.complete_active(), None);
        assert!(buf.completed().is_empty());
    }

    #[test]
    fn reset_clears_everything_from_any_state() {
        let mut buf = OutputBuffer::new();
        buf.submit([Line::output("A"), Line::output("B"), Line::output("C")]);
        buf.complete_active();

        buf.reset();
        assert!(buf.completed().is_empty());
        assert_eq!(buf.pending().len(), 0);
        assert!(buf.active().is_none());
    }

    #[test]
    fn reset_bumps_generation_even_when_refilled() {
        let mut buf = OutputBuffer::new();
        buf.submit([Line::output("A")]);
        buf.complete_active();
        let before = buf.generation();

        buf.reset();
        buf.submit([Line::blank()]);
        buf.complete_active();
        assert_eq!(buf.completed().len(), 1);
        assert_ne!(buf.generation(), before);

        // Plain completion leaves it alone
        let after = buf.generation();
        buf.submit([Line::output("B")]);
        buf.complete_active();
        assert_eq!(buf.generation(), after);
    }
}
