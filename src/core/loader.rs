//! # Boot Splash
//!
//! A short sequence of "connecting..." messages shown before the terminal.
//!
//! ```text
//! step 0: type message ─▶ hold hold_ms ─▶ step 1: type ... ─▶ last step held
//!         ─▶ linger 800ms ─▶ Fading (300ms) ─▶ Finished
//! ```
//!
//! Every wait is a scheduler timer owned by the loader; [`Loader::cancel`]
//! drops whichever one is pending so a skipped splash can't wake up later.

use log::debug;

use crate::core::content::LoaderStep;
use crate::core::timer::{Scheduler, TimerEvent, TimerId};
use crate::core::typing::{Progress, TypedText};

pub const LOADER_TYPE_DELAY_MS: u64 = 50;
pub const LOADER_LINGER_MS: u64 = 800;
pub const LOADER_FADE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Typing or holding step `n`
    Step(usize),
    /// All steps shown; waiting before fading out
    Lingering,
    Fading,
    Finished,
}

#[derive(Debug)]
pub struct Loader {
    steps: Vec<LoaderStep>,
    phase: LoaderPhase,
    text: Option<TypedText>,
    /// Pending hold/linger/fade timer (typing steps are owned by `text`)
    wait: Option<TimerId>,
}

impl Loader {
    pub fn new(steps: Vec<LoaderStep>) -> Self {
        Self {
            steps,
            phase: LoaderPhase::Step(0),
            text: None,
            wait: None,
        }
    }

    /// Kick off the first step.
    pub fn start(&mut self, scheduler: &mut Scheduler) {
        self.enter_step(0, scheduler);
    }

    /// Dispatch one of the loader's own timer events.
    pub fn on_timer(&mut self, event: &TimerEvent, scheduler: &mut Scheduler) {
        match event {
            TimerEvent::LoaderType => {
                let done = self
                    .text
                    .as_mut()
                    .is_some_and(|t| t.advance(scheduler) == Progress::Complete);
                if done {
                    self.hold_current(scheduler);
                }
            }
            TimerEvent::LoaderAdvance => {
                self.wait = None;
                if let LoaderPhase::Step(i) = self.phase {
                    self.enter_step(i + 1, scheduler);
                }
            }
            TimerEvent::LoaderDismiss => {
                self.wait = None;
                match self.phase {
                    LoaderPhase::Lingering => {
                        self.phase = LoaderPhase::Fading;
                        self.wait =
                            Some(scheduler.schedule(LOADER_FADE_MS, TimerEvent::LoaderDismiss));
                    }
                    LoaderPhase::Fading => {
                        debug!("Splash finished");
                        self.phase = LoaderPhase::Finished;
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    /// Stop the splash immediately, cancelling any pending timer.
    pub fn cancel(&mut self, scheduler: &mut Scheduler) {
        if let Some(text) = self.text.as_mut() {
            text.cancel(scheduler);
        }
        if let Some(id) = self.wait.take() {
            scheduler.cancel(id);
        }
        self.phase = LoaderPhase::Finished;
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == LoaderPhase::Finished
    }

    /// The part of the current message typed so far.
    pub fn visible(&self) -> &str {
        self.text.as_ref().map(TypedText::visible).unwrap_or("")
    }

    /// True while a message is still being typed (cursor shown).
    pub fn is_typing(&self) -> bool {
        self.text.as_ref().is_some_and(|t| !t.is_complete())
    }

    fn enter_step(&mut self, index: usize, scheduler: &mut Scheduler) {
        let Some(step) = self.steps.get(index) else {
            self.phase = LoaderPhase::Lingering;
            self.wait = Some(scheduler.schedule(LOADER_LINGER_MS, TimerEvent::LoaderDismiss));
            return;
        };

        debug!("Splash step {}: {}", index, step.message);
        self.phase = LoaderPhase::Step(index);
        let mut text = TypedText::new(
            step.message.clone(),
            LOADER_TYPE_DELAY_MS,
            TimerEvent::LoaderType,
        );
        let progress = text.begin(scheduler);
        self.text = Some(text);
        if progress == Progress::Complete {
            self.hold_current(scheduler);
        }
    }

    fn hold_current(&mut self, scheduler: &mut Scheduler) {
        if let LoaderPhase::Step(i) = self.phase {
            let hold = self.steps.get(i).map_or(0, |s| s.hold_ms);
            self.wait = Some(scheduler.schedule(hold, TimerEvent::LoaderAdvance));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(message: &str, hold_ms: u64) -> LoaderStep {
        LoaderStep {
            message: message.to_string(),
            hold_ms,
        }
    }

    fn tick(loader: &mut Loader, s: &mut Scheduler, now: u64) {
        while let Some((_, event)) = s.pop_due(now) {
            loader.on_timer(&event, s);
        }
    }

    #[test]
    fn types_each_message_then_holds() {
        let mut s = Scheduler::new();
        let mut loader = Loader::new(vec![step("ab", 100), step("c", 100)]);
        loader.start(&mut s);

        tick(&mut loader, &mut s, 50);
        assert_eq!(loader.visible(), "a");
        assert!(loader.is_typing());
        tick(&mut loader, &mut s, 100);
        assert_eq!(loader.visible(), "ab");
        assert!(!loader.is_typing());

        // Still holding step 0 just before the hold runs out
        tick(&mut loader, &mut s, 199);
        assert_eq!(loader.phase(), LoaderPhase::Step(0));
        tick(&mut loader, &mut s, 200);
        assert_eq!(loader.phase(), LoaderPhase::Step(1));
        assert_eq!(loader.visible(), "");
    }

    #[test]
    fn finishes_after_linger_and_fade() {
        let mut s = Scheduler::new();
        let mut loader = Loader::new(vec![step("x", 10)]);
        loader.start(&mut s);

        // 50 typing + 10 hold = 60, then linger 800 => fade starts at 860
        tick(&mut loader, &mut s, 60);
        assert_eq!(loader.phase(), LoaderPhase::Lingering);
        tick(&mut loader, &mut s, 859);
        assert_eq!(loader.phase(), LoaderPhase::Lingering);
        tick(&mut loader, &mut s, 860);
        assert_eq!(loader.phase(), LoaderPhase::Fading);
        tick(&mut loader, &mut s, 1_159);
        assert!(!loader.is_finished());
        tick(&mut loader, &mut s, 1_160);
        assert!(loader.is_finished());
        assert!(s.is_idle());
    }

    #[test]
    fn no_steps_goes_straight_to_linger() {
        let mut s = Scheduler::new();
        let mut loader = Loader::new(Vec::new());
        loader.start(&mut s);
        assert_eq!(loader.phase(), LoaderPhase::Lingering);
        tick(&mut loader, &mut s, LOADER_LINGER_MS + LOADER_FADE_MS);
        assert!(loader.is_finished());
    }

    #[test]
    fn empty_message_holds_without_typing() {
        let mut s = Scheduler::new();
        let mut loader = Loader::new(vec![step("", 30), step("y", 0)]);
        loader.start(&mut s);
        tick(&mut loader, &mut s, 30);
        assert_eq!(loader.phase(), LoaderPhase::Step(1));
    }

    #[test]
    fn cancel_drops_pending_timers() {
        let mut s = Scheduler::new();
        let mut loader = Loader::new(vec![step("hello", 100)]);
        loader.start(&mut s);
        tick(&mut loader, &mut s, 60);

        loader.cancel(&mut s);
        assert!(loader.is_finished());
        assert!(s.is_idle());
    }
}
