//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core::Action values, and carries out the
//! one outward side effect the core asks for: opening links.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Clock
//!
//! Every loop iteration sends `Action::Tick(ms since start)` to the core,
//! which fires whatever timers are due. The core never reads the clock.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (timers pending): polls every ~10ms so typing stays smooth.
//! - **Idle**: sleeps up to 250ms, redrawing on events, resize, or when the
//!   header clock ticks over.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
mod palette;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use tokio::task::JoinHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::content::Content;
use crate::core::input::InputKey;
use crate::core::link::LinkOpener;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{Header, OutputViewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_POLL: Duration = Duration::from_millis(10);
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub output_view: OutputViewState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            output_view: OutputViewState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Opens URLs with the platform's opener (`xdg-open`, `open`, `start`).
///
/// The process runs on the tokio runtime, fire-and-forget: the outcome is
/// only logged.
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl SystemOpener {
    pub fn platform() -> Self {
        if cfg!(target_os = "windows") {
            // Empty title argument, otherwise `start` treats a quoted URL as one
            Self::with_program("cmd", &["/C", "start", ""])
        } else if cfg!(target_os = "macos") {
            Self::with_program("open", &[])
        } else {
            Self::with_program("xdg-open", &[])
        }
    }

    pub fn with_program(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Spawn the opener for `url`. The handle resolves to whether the
    /// opener exited successfully. `None` if there is no runtime to spawn on.
    pub fn spawn(&self, url: &str) -> Option<JoinHandle<bool>> {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Cannot open {}: no async runtime ({})", url, e);
                return None;
            }
        };

        let mut command = tokio::process::Command::new(&self.program);
        command
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        let url = url.to_string();
        let program = self.program.clone();

        Some(runtime.spawn(async move {
            match command.status().await {
                Ok(status) if status.success() => {
                    info!("Opened {} with {}", url, program);
                    true
                }
                Ok(status) => {
                    warn!("{} exited with {} for {}", program, status, url);
                    false
                }
                Err(e) => {
                    warn!("Failed to run {} for {}: {}", program, url, e);
                    false
                }
            }
        }))
    }
}

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) {
        // Outcome is logged by the task itself
        let _ = self.spawn(url);
    }
}

pub fn run(config: ResolvedConfig, content: Content) -> std::io::Result<()> {
    let opener = Arc::new(SystemOpener::platform());
    let mut app = App::from_config(opener, content, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    update(&mut app, Action::Start);
    let mut needs_redraw = true; // Force first frame
    let mut clock = String::new();

    loop {
        // Fire due timers
        let now_ms = start_time.elapsed().as_millis() as u64;
        if update(&mut app, Action::Tick(now_ms)) == Effect::Redraw {
            needs_redraw = true;
        }

        let current_clock = Header::local_clock();
        if current_clock != clock {
            clock = current_clock;
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, &clock))?;
            needs_redraw = false;
        }

        let timeout = if app.is_animating() {
            ANIMATION_POLL
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match &event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::Escape => {
                    update(&mut app, Action::SkipSplash);
                }
                TuiEvent::Paste(text) => {
                    for c in text.chars().filter(|c| !c.is_control()) {
                        update(&mut app, Action::Key(InputKey::Char(c)));
                    }
                }
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown
                | TuiEvent::ScrollToBottom => {
                    tui.output_view.handle_event(&event);
                }
                other => {
                    if let Some(key) = other.input_key() {
                        update(&mut app, Action::Key(key));
                    }
                }
            }
            if should_quit {
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_opener_has_program() {
        let opener = SystemOpener::platform();
        assert!(!opener.program.is_empty());
    }

    #[test]
    fn test_spawn_without_runtime_is_none() {
        let opener = SystemOpener::with_program("true", &[]);
        assert!(opener.spawn("https://example.com").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_reports_exit_status() {
        tokio_test::block_on(async {
            let ok = SystemOpener::with_program("true", &[]);
            let handle = ok.spawn("https://example.com").unwrap();
            assert!(handle.await.unwrap());

            let missing = SystemOpener::with_program("termfolio-no-such-opener", &[]);
            let handle = missing.spawn("https://example.com").unwrap();
            assert!(!handle.await.unwrap());
        });
    }
}
