//! # Application State
//!
//! Core state for termfolio. Domain logic only; presentation state (scroll
//! offsets, layout caches) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── opener: Arc<dyn LinkOpener>   // "open URL" capability
//! ├── content: Content              // canned responses, loaded once
//! ├── theme: Theme                  // active style bundle
//! ├── pacing: Pacing                // per-kind typing delays
//! ├── output: OutputBuffer          // completed / active / pending lines
//! ├── typing: Option<TypedText>     // renderer for the active line
//! ├── input: InputController        // live input + history log
//! ├── scheduler: Scheduler          // every pending timer
//! ├── loader: Option<Loader>        // boot splash while it is up
//! └── welcome_timer: Option<TimerId>
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::content::Content;
use crate::core::input::InputController;
use crate::core::link::LinkOpener;
use crate::core::loader::Loader;
use crate::core::output::OutputBuffer;
use crate::core::theme::Theme;
use crate::core::timer::{Scheduler, TimerId};
use crate::core::typing::{Pacing, TypedText};

pub struct App {
    pub opener: Arc<dyn LinkOpener>,
    pub content: Content,
    pub theme: Theme,
    pub pacing: Pacing,
    pub show_splash: bool,
    pub startup_delay_ms: u64,
    pub output: OutputBuffer,
    pub typing: Option<TypedText>,
    pub input: InputController,
    pub scheduler: Scheduler,
    pub loader: Option<Loader>,
    pub welcome_timer: Option<TimerId>,
}

impl App {
    pub fn new(opener: Arc<dyn LinkOpener>, content: Content) -> Self {
        Self {
            opener,
            content,
            theme: Theme::default(),
            pacing: Pacing::default(),
            show_splash: false,
            startup_delay_ms: 0,
            output: OutputBuffer::new(),
            typing: None,
            input: InputController::new(),
            scheduler: Scheduler::new(),
            loader: None,
            welcome_timer: None,
        }
    }

    pub fn from_config(
        opener: Arc<dyn LinkOpener>,
        content: Content,
        config: &ResolvedConfig,
    ) -> Self {
        Self {
            theme: config.theme,
            pacing: config.pacing,
            show_splash: config.show_splash,
            startup_delay_ms: config.startup_delay_ms,
            ..Self::new(opener, content)
        }
    }

    /// True while the boot splash covers the terminal.
    pub fn splash_visible(&self) -> bool {
        self.loader.is_some()
    }

    /// Visible prefix of the line currently being typed.
    pub fn active_text(&self) -> Option<&str> {
        self.typing.as_ref().map(TypedText::visible)
    }

    /// Something is still moving on screen (drives the redraw cadence).
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::theme::Theme;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let (app, _) = test_app();
        assert_eq!(app.theme, Theme::Matrix);
        assert!(app.output.is_idle());
        assert!(!app.splash_visible());
        assert!(!app.is_animating());
        assert_eq!(app.active_text(), None);
    }
}
