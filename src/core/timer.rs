//! # Scheduler
//!
//! Single-threaded virtual clock with single-shot, cancellable timers.
//!
//! Nothing here sleeps. The adapter feeds the current time in through
//! `Action::Tick`, and the reducer drains due timers with [`Scheduler::pop_due`]
//! one at a time, so a coarse tick still replays every intermediate step in
//! deadline order. Tests drive the same clock with made-up timestamps.
//!
//! Every owner of a timer keeps its [`TimerId`] and cancels it when the thing
//! it animates is replaced or torn down. A cancelled timer is removed outright
//! and can never fire.

use std::collections::BTreeMap;

/// Opaque handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// What a timer means when it fires. Dispatched by `core::action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Reveal the next unit of the active output line
    TypeNext,
    /// Reveal the next unit of the splash message
    LoaderType,
    /// Splash step finished holding, move to the next one
    LoaderAdvance,
    /// Splash done: start fading, then hand over to the terminal
    LoaderDismiss,
    /// Auto-type the `welcome` command
    Welcome,
    /// Deferred "open in a new context"
    OpenLink(String),
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    /// Keyed by (deadline, id) so iteration order is firing order; ids are
    /// monotonic, which keeps ties in scheduling order.
    pending: BTreeMap<(u64, TimerId), TimerEvent>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    pub fn schedule(&mut self, delay_ms: u64, event: TimerEvent) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let deadline = self.now_ms.saturating_add(delay_ms);
        self.pending.insert((deadline, id), event);
        id
    }

    /// Returns true if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let key = self.pending.keys().find(|(_, tid)| *tid == id).copied();
        match key {
            Some(key) => self.pending.remove(&key).is_some(),
            None => false,
        }
    }

    /// Remove and return the earliest timer due at or before `now_ms`,
    /// advancing the clock to its deadline. When nothing is due the clock
    /// moves to `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TimerId, TimerEvent)> {
        let due = self
            .pending
            .first_key_value()
            .is_some_and(|((deadline, _), _)| *deadline <= now_ms);

        if !due {
            self.now_ms = self.now_ms.max(now_ms);
            return None;
        }

        let ((deadline, id), event) = self.pending.pop_first()?;
        self.now_ms = self.now_ms.max(deadline);
        Some((id, event))
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.keys().any(|(_, tid)| *tid == id)
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
