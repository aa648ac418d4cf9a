//! # Typed-Text Renderer
//!
//! Reveals a string one `char` at a time on a fixed cadence.
//!
//! ```text
//!   begin()          advance()       advance()
//!  ""  ── delay ──▶  "o"  ── delay ──▶  "ok"  ──▶ Complete (once)
//! ```
//!
//! Each step is a single-shot timer in the [`Scheduler`]. The renderer keeps
//! the handle of its pending step, and [`TypedText::cancel`] removes it, so a
//! renderer that has been replaced can never receive a stale step.

use crate::core::line::{Line, LineKind};
use crate::core::timer::{Scheduler, TimerEvent, TimerId};

pub const DEFAULT_COMMAND_DELAY_MS: u64 = 50;
pub const DEFAULT_OUTPUT_DELAY_MS: u64 = 20;

/// Result of driving the renderer one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// More text is still to come; the next step is scheduled.
    Revealed,
    /// The full string is visible. Reported exactly once.
    Complete,
    /// Already complete (or cancelled); nothing happened.
    Idle,
}

/// Per-unit typing delay by line kind.
///
/// Command echoes type slower than printed output so the two read
/// differently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub command_delay_ms: u64,
    pub output_delay_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            command_delay_ms: DEFAULT_COMMAND_DELAY_MS,
            output_delay_ms: DEFAULT_OUTPUT_DELAY_MS,
        }
    }
}

impl Pacing {
    pub fn delay_for(&self, kind: LineKind) -> u64 {
        match kind {
            LineKind::Command => self.command_delay_ms,
            _ => self.output_delay_ms,
        }
    }
}

#[derive(Debug)]
pub struct TypedText {
    target: String,
    delay_ms: u64,
    /// Byte offset of the end of the visible prefix (always a char boundary)
    revealed: usize,
    pending: Option<TimerId>,
    /// The timer event this renderer schedules for its own steps
    step_event: TimerEvent,
    completed: bool,
}

impl TypedText {
    pub fn new(target: impl Into<String>, delay_ms: u64, step_event: TimerEvent) -> Self {
        Self {
            target: target.into(),
            delay_ms,
            revealed: 0,
            pending: None,
            step_event,
            completed: false,
        }
    }

    /// Renderer for an output line, paced by its kind.
    pub fn for_line(line: &Line, pacing: &Pacing) -> Self {
        Self::new(line.text(), pacing.delay_for(line.kind()), TimerEvent::TypeNext)
    }

    /// Start the animation. Empty text completes immediately without
    /// scheduling anything.
    pub fn begin(&mut self, scheduler: &mut Scheduler) -> Progress {
        if self.completed {
            return Progress::Idle;
        }
        if self.target.is_empty() {
            self.completed = true;
            return Progress::Complete;
        }
        self.schedule_next(scheduler);
        Progress::Revealed
    }

    /// Reveal one more unit. Call when this renderer's step timer fires.
    pub fn advance(&mut self, scheduler: &mut Scheduler) -> Progress {
        if self.completed {
            return Progress::Idle;
        }
        self.pending = None;

        if let Some(c) = self.target[self.revealed..].chars().next() {
            self.revealed += c.len_utf8();
        }

        if self.revealed >= self.target.len() {
            self.completed = true;
            Progress::Complete
        } else {
            self.schedule_next(scheduler);
            Progress::Revealed
        }
    }

    /// Invalidate the pending step, if any. The renderer stays where it is.
    pub fn cancel(&mut self, scheduler: &mut Scheduler) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
    }

    pub fn visible(&self) -> &str {
        &self.target[..self.revealed]
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    fn schedule_next(&mut self, scheduler: &mut Scheduler) {
        self.pending = Some(scheduler.schedule(self.delay_ms, self.step_event.clone()));
    }
}

/// Lazy sequence of increasingly complete prefixes: `""`, then one more
/// `char` each step, ending with the full text.
pub fn prefixes(text: &str) -> Prefixes<'_> {
    Prefixes {
        text,
        next: Some(0),
    }
}

#[derive(Debug, Clone)]
pub struct Prefixes<'a> {
    text: &'a str,
    next: Option<usize>,
}

impl<'a> Iterator for Prefixes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.next?;
        let prefix = &self.text[..end];
        self.next = self.text[end..]
            .chars()
            .next()
            .map(|c| end + c.len_utf8());
        Some(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fire every due step up to `now`, recording what was visible after each.
    fn run_until(t: &mut TypedText, s: &mut Scheduler, now: u64) -> (Vec<String>, usize) {
        let mut seen = Vec::new();
        let mut completions = 0;
        while let Some((_, TimerEvent::TypeNext)) = s.pop_due(now) {
            if t.advance(s) == Progress::Complete {
                completions += 1;
            }
            seen.push(t.visible().to_string());
        }
        (seen, completions)
    }

    #[test]
    fn reveals_ok_in_order_and_completes_once() {
        let mut s = Scheduler::new();
        let mut t = TypedText::new("ok", 10, TimerEvent::TypeNext);

        assert_eq!(t.begin(&mut s), Progress::Revealed);
        assert_eq!(t.visible(), "");

        let (seen, completions) = run_until(&mut t, &mut s, 1_000);
        assert_eq!(seen, vec!["o", "ok"]);
        assert_eq!(completions, 1);
        assert!(t.is_complete());
        // Nothing left scheduled once complete
        assert!(s.is_idle());
        assert_eq!(t.advance(&mut s), Progress::Idle);
    }

    #[test]
    fn steps_follow_the_cadence() {
        let mut s = Scheduler::new();
        let mut t = TypedText::new("abc", 20, TimerEvent::TypeNext);
        t.begin(&mut s);

        run_until(&mut t, &mut s, 19);
        assert_eq!(t.visible(), "");
        run_until(&mut t, &mut s, 40);
        assert_eq!(t.visible(), "ab");
        run_until(&mut t, &mut s, 60);
        assert_eq!(t.visible(), "abc");
    }

    #[test]
    fn empty_text_completes_immediately() {
        let mut s = Scheduler::new();
        let mut t = TypedText::new("", 50, TimerEvent::TypeNext);
        assert_eq!(t.begin(&mut s), Progress::Complete);
        assert!(t.is_complete());
        assert!(s.is_idle());
        assert_eq!(t.begin(&mut s), Progress::Idle);
    }

    #[test]
    fn cancel_removes_pending_step() {
        let mut s = Scheduler::new();
        let mut t = TypedText::new("hello", 10, TimerEvent::TypeNext);
        t.begin(&mut s);
        let id = t.pending_timer().unwrap();

        t.cancel(&mut s);
        assert!(!s.is_pending(id));
        assert!(s.pop_due(10_000).is_none());
        assert_eq!(t.visible(), "");
    }

    #[test]
    fn multibyte_text_reveals_whole_chars() {
        let mut s = Scheduler::new();
        let mut t = TypedText::new("✓ é", 1, TimerEvent::TypeNext);
        t.begin(&mut s);
        let (seen, _) = run_until(&mut t, &mut s, 100);
        assert_eq!(seen, vec!["✓", "✓ ", "✓ é"]);
    }

    #[test]
    fn pacing_depends_on_kind() {
        let pacing = Pacing::default();
        assert_eq!(pacing.delay_for(LineKind::Command), 50);
        assert_eq!(pacing.delay_for(LineKind::Output), 20);
        assert_eq!(pacing.delay_for(LineKind::Error), 20);
    }

    #[test]
    fn prefixes_are_lazy_and_restartable() {
        let p = prefixes("ok");
        assert_eq!(p.clone().collect::<Vec<_>>(), vec!["", "o", "ok"]);
        // Cloned iterator restarts from the top
        assert_eq!(p.count(), 3);
        assert_eq!(prefixes("").collect::<Vec<_>>(), vec![""]);
    }
}
