//! # Actions
//!
//! Everything that can happen in termfolio becomes an `Action`.
//! Visitor presses Enter? That's `Action::Key(InputKey::Enter)`.
//! Time passes? That's `Action::Tick(now_ms)`.
//!
//! The `update()` function takes the current state and an action, applies
//! the transition, and returns an `Effect` for the adapter. Timers fire
//! here, in deadline order, and nowhere else.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::commands::{self, Response, SideEffect};
use crate::core::input::InputKey;
use crate::core::line::Line;
use crate::core::loader::Loader;
use crate::core::state::App;
use crate::core::timer::TimerEvent;
use crate::core::typing::{Progress, TypedText};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the splash (if enabled) or schedule the welcome banner
    Start,
    /// Milliseconds since start
    Tick(u64),
    Key(InputKey),
    /// Run a command without going through the input line or history
    Submit(String),
    SkipSplash,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Start => {
            start(app);
            Effect::Redraw
        }
        Action::Tick(now_ms) => {
            if tick(app, now_ms) {
                Effect::Redraw
            } else {
                Effect::None
            }
        }
        Action::Key(key) => {
            if app.splash_visible() {
                if key == InputKey::Enter {
                    skip_splash(app);
                    return Effect::Redraw;
                }
                return Effect::None;
            }
            if let Some(text) = app.input.handle_key(key) {
                run_command(app, &text);
            }
            Effect::Redraw
        }
        Action::Submit(text) => {
            run_command(app, &text);
            Effect::Redraw
        }
        Action::SkipSplash => {
            skip_splash(app);
            Effect::Redraw
        }
        Action::Quit => {
            shutdown(app);
            Effect::Quit
        }
    }
}

fn start(app: &mut App) {
    if app.show_splash && !app.content.loader.is_empty() {
        info!("Starting boot splash ({} steps)", app.content.loader.len());
        let mut loader = Loader::new(app.content.loader.clone());
        loader.start(&mut app.scheduler);
        app.loader = Some(loader);
    } else {
        schedule_welcome(app);
    }
}

fn skip_splash(app: &mut App) {
    if let Some(mut loader) = app.loader.take() {
        info!("Splash skipped");
        loader.cancel(&mut app.scheduler);
        schedule_welcome(app);
    }
}

fn schedule_welcome(app: &mut App) {
    if let Some(id) = app.welcome_timer.take() {
        app.scheduler.cancel(id);
    }
    app.welcome_timer = Some(
        app.scheduler
            .schedule(app.startup_delay_ms, TimerEvent::Welcome),
    );
}

fn shutdown(app: &mut App) {
    debug!("Shutting down with {} pending timers", app.scheduler.len());
    if let Some(mut typing) = app.typing.take() {
        typing.cancel(&mut app.scheduler);
    }
    if let Some(mut loader) = app.loader.take() {
        loader.cancel(&mut app.scheduler);
    }
    app.welcome_timer = None;
    app.scheduler.clear();
}

/// Fire every timer due by `now_ms`. Returns true if anything fired.
fn tick(app: &mut App, now_ms: u64) -> bool {
    let mut fired = false;
    while let Some((_, event)) = app.scheduler.pop_due(now_ms) {
        fired = true;
        dispatch(app, event);
    }
    fired
}

fn dispatch(app: &mut App, event: TimerEvent) {
    match event {
        TimerEvent::TypeNext => {
            let done = app
                .typing
                .as_mut()
                .is_some_and(|t| t.advance(&mut app.scheduler) == Progress::Complete);
            if done {
                app.output.complete_active();
                start_active(app);
            }
        }
        TimerEvent::LoaderType | TimerEvent::LoaderAdvance | TimerEvent::LoaderDismiss => {
            let finished = match app.loader.as_mut() {
                Some(loader) => {
                    loader.on_timer(&event, &mut app.scheduler);
                    loader.is_finished()
                }
                None => false,
            };
            if finished {
                app.loader = None;
                schedule_welcome(app);
            }
        }
        TimerEvent::Welcome => {
            app.welcome_timer = None;
            run_command(app, "welcome");
        }
        TimerEvent::OpenLink(url) => open_link(app, &url),
    }
}

/// Interpret `raw` and queue the echo plus response.
fn run_command(app: &mut App, raw: &str) {
    debug!("Running command {:?}", raw);
    match commands::interpret(raw, &app.content, app.theme) {
        Response::Clear => clear(app),
        Response::Lines(lines) => enqueue(app, raw, lines),
        Response::WithEffect { lines, effect } => {
            enqueue(app, raw, lines);
            apply(app, effect);
        }
    }
}

fn enqueue(app: &mut App, raw: &str, lines: Vec<Line>) {
    let echo = std::iter::once(Line::command(raw));
    if app.output.submit(echo.chain(lines)) {
        start_active(app);
    }
}

fn apply(app: &mut App, effect: SideEffect) {
    match effect {
        SideEffect::SetTheme(theme) => {
            info!("Theme changed: {:?} -> {:?}", app.theme, theme);
            app.theme = theme;
        }
        SideEffect::OpenLink { url, delay_ms: 0 } => open_link(app, &url),
        SideEffect::OpenLink { url, delay_ms } => {
            app.scheduler.schedule(delay_ms, TimerEvent::OpenLink(url));
        }
    }
}

fn open_link(app: &App, url: &str) {
    info!("Opening link: {}", url);
    app.opener.open(url);
}

/// Reset the output buffer, invalidating the active line's pending step.
fn clear(app: &mut App) {
    if let Some(mut typing) = app.typing.take() {
        typing.cancel(&mut app.scheduler);
    }
    app.output.reset();
}

/// Start a renderer on the buffer's active line. Empty lines complete on
/// the spot, so keep promoting until something needs animating.
fn start_active(app: &mut App) {
    if let Some(mut old) = app.typing.take() {
        old.cancel(&mut app.scheduler);
    }
    while let Some(line) = app.output.active() {
        let mut typing = TypedText::for_line(line, &app.pacing);
        if typing.begin(&mut app.scheduler) == Progress::Complete {
            app.output.complete_active();
            continue;
        }
        app.typing = Some(typing);
        return;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::LoaderStep;
    use crate::core::line::LineKind;
    use crate::core::loader::{LOADER_FADE_MS, LOADER_LINGER_MS};
    use crate::core::theme::Theme;
    use crate::test_support::test_app;

    fn completed_texts(app: &App) -> Vec<String> {
        app.output
            .completed()
            .iter()
            .map(|l| l.text().to_string())
            .collect()
    }

    fn type_line(app: &mut App, s: &str) -> Effect {
        for c in s.chars() {
            update(app, Action::Key(InputKey::Char(c)));
        }
        update(app, Action::Key(InputKey::Enter))
    }

    /// Run until nothing is scheduled (bounded so a bug can't spin forever).
    fn settle(app: &mut App) {
        let mut now = app.scheduler.now();
        for _ in 0..100_000 {
            if app.scheduler.is_idle() {
                return;
            }
            now += 10;
            update(app, Action::Tick(now));
        }
        panic!("scheduler never went idle");
    }

    #[test]
    fn command_echo_animates_before_response() {
        let (mut app, _) = test_app();
        type_line(&mut app, "whoami");

        let active = app.output.active().unwrap();
        assert_eq!(active.kind(), LineKind::Command);
        assert_eq!(active.text(), "whoami");
        assert_eq!(app.active_text(), Some(""));

        // Command cadence is 50ms per char
        update(&mut app, Action::Tick(50));
        assert_eq!(app.active_text(), Some("w"));
        update(&mut app, Action::Tick(299));
        assert_eq!(app.active_text(), Some("whoam"));
        update(&mut app, Action::Tick(300));
        assert_eq!(completed_texts(&app), vec!["whoami"]);
        assert_eq!(app.output.active().map(Line::text), Some("You are browsing as: Visitor"));
    }

    #[test]
    fn responses_complete_in_order_and_buffer_goes_idle() {
        let (mut app, _) = test_app();
        type_line(&mut app, "whoami");
        settle(&mut app);

        assert!(app.output.is_idle());
        assert!(app.typing.is_none());
        assert_eq!(
            completed_texts(&app),
            vec![
                "whoami",
                "You are browsing as: Visitor",
                "Welcome to my terminal portfolio!"
            ]
        );
    }

    #[test]
    fn coarse_tick_replays_every_step() {
        let (mut app, _) = test_app();
        type_line(&mut app, "whoami");
        update(&mut app, Action::Tick(60_000));
        assert!(app.output.is_idle());
        assert_eq!(completed_texts(&app).len(), 3);
    }

    #[test]
    fn commands_submitted_while_busy_queue_behind() {
        let (mut app, _) = test_app();
        type_line(&mut app, "whoami");
        type_line(&mut app, "bogus");
        assert_eq!(app.output.active().map(Line::text), Some("whoami"));
        settle(&mut app);

        let texts = completed_texts(&app);
        assert_eq!(texts.len(), 6);
        assert_eq!(texts[3], "bogus");
        assert!(texts[4].contains("Command not found: bogus"));
    }

    #[test]
    fn empty_input_echoes_blank_prompt_only() {
        let (mut app, _) = test_app();
        type_line(&mut app, "");
        // Empty echo completes on the spot
        assert!(app.output.is_idle());
        assert_eq!(app.output.completed(), [Line::command("")]);
        assert!(app.input.history().entries().is_empty());
    }

    #[test]
    fn blank_lines_do_not_stall_the_queue() {
        let (mut app, _) = test_app();
        update(&mut app, Action::Submit("about".into()));
        settle(&mut app);
        let expected = 1 + app.content.section("about").len();
        assert_eq!(app.output.completed().len(), expected);
    }

    #[test]
    fn clear_resets_everything_and_cancels_pending_step() {
        let (mut app, _) = test_app();
        type_line(&mut app, "help");
        update(&mut app, Action::Tick(1_000));
        assert!(!app.output.completed().is_empty());
        let pending = app.typing.as_ref().and_then(TypedText::pending_timer).unwrap();

        // Takes effect on submit, even mid-animation
        type_line(&mut app, "clear");
        assert!(app.output.completed().is_empty());
        assert_eq!(app.output.pending().len(), 0);
        assert!(app.output.active().is_none());
        assert!(app.typing.is_none());
        assert!(!app.scheduler.is_pending(pending));
        assert!(app.scheduler.is_idle());

        update(&mut app, Action::Tick(10_000));
        assert!(app.output.completed().is_empty());
        assert_eq!(app.input.history().entries(), ["help", "clear"]);
    }

    #[test]
    fn history_and_recall_through_keys() {
        let (mut app, _) = test_app();
        for c in ["help", "about", "help"] {
            type_line(&mut app, c);
        }
        assert_eq!(app.input.history().entries(), ["help", "about"]);

        update(&mut app, Action::Key(InputKey::Up));
        assert_eq!(app.input.buffer(), "about");
        update(&mut app, Action::Key(InputKey::Up));
        assert_eq!(app.input.buffer(), "help");
        update(&mut app, Action::Key(InputKey::Down));
        assert_eq!(app.input.buffer(), "about");
    }

    #[test]
    fn theme_command_switches_theme() {
        let (mut app, _) = test_app();
        update(&mut app, Action::Submit("theme cyberpunk".into()));
        assert_eq!(app.theme, Theme::Cyberpunk);

        update(&mut app, Action::Submit("theme bogus".into()));
        assert_eq!(app.theme, Theme::Cyberpunk);
        settle(&mut app);

        let texts = completed_texts(&app);
        assert_eq!(texts[1], "Theme changed to Cyberpunk Purple");
        assert!(texts[3].contains("bogus"));
        assert!(texts[4].contains("cyberpunk"));
    }

    #[test]
    fn gui_opens_link_after_delay() {
        let (mut app, opener) = test_app();
        update(&mut app, Action::Submit("gui".into()));
        update(&mut app, Action::Tick(1_499));
        assert!(opener.opened().is_empty());
        update(&mut app, Action::Tick(1_500));
        assert_eq!(
            opener.opened(),
            vec!["https://codemastercse.github.io/my-digital-space/"]
        );
    }

    #[test]
    fn email_opens_mailto_immediately() {
        let (mut app, opener) = test_app();
        update(&mut app, Action::Submit("email".into()));
        assert_eq!(opener.opened(), vec!["mailto:sampad.sg.cse@gmail.com"]);
    }

    #[test]
    fn start_without_splash_types_welcome_after_delay() {
        let (mut app, _) = test_app();
        app.startup_delay_ms = 500;
        update(&mut app, Action::Start);
        assert!(!app.splash_visible());

        update(&mut app, Action::Tick(499));
        assert!(app.output.is_idle());
        update(&mut app, Action::Tick(500));
        assert_eq!(app.output.active().map(Line::text), Some("welcome"));

        settle(&mut app);
        let texts = completed_texts(&app);
        assert_eq!(texts[0], "welcome");
        assert_eq!(
            texts.last().map(String::as_str),
            app.content.welcome.last().map(String::as_str)
        );
        // Auto-typed welcome isn't part of the visitor's history
        assert!(app.input.history().entries().is_empty());
    }

    #[test]
    fn splash_runs_then_hands_over_to_welcome() {
        let (mut app, _) = test_app();
        app.show_splash = true;
        app.startup_delay_ms = 500;
        app.content.loader = vec![LoaderStep {
            message: "hi".into(),
            hold_ms: 100,
        }];
        update(&mut app, Action::Start);
        assert!(app.splash_visible());

        // Typing keys is ignored while the splash is up
        update(&mut app, Action::Key(InputKey::Char('x')));
        assert_eq!(app.input.buffer(), "");

        // 2 chars * 50 + 100 hold + linger + fade
        let done = 200 + LOADER_LINGER_MS + LOADER_FADE_MS;
        update(&mut app, Action::Tick(done - 1));
        assert!(app.splash_visible());
        update(&mut app, Action::Tick(done));
        assert!(!app.splash_visible());
        assert!(app.welcome_timer.is_some());
    }

    #[test]
    fn enter_skips_splash_and_cancels_its_timers() {
        let (mut app, _) = test_app();
        app.show_splash = true;
        update(&mut app, Action::Start);
        assert!(app.splash_visible());

        update(&mut app, Action::Key(InputKey::Enter));
        assert!(!app.splash_visible());
        // Only the welcome timer remains
        assert_eq!(app.scheduler.len(), 1);
        assert!(app.welcome_timer.is_some());
    }

    #[test]
    fn quit_tears_down_all_timers() {
        let (mut app, opener) = test_app();
        update(&mut app, Action::Submit("gui".into()));
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert!(app.scheduler.is_idle());
        update(&mut app, Action::Tick(10_000));
        assert!(opener.opened().is_empty());
    }

    #[test]
    fn tick_with_nothing_due_needs_no_redraw() {
        let (mut app, _) = test_app();
        assert_eq!(update(&mut app, Action::Tick(100)), Effect::None);
    }
}
