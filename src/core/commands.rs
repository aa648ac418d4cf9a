//! # Command Interpreter
//!
//! Maps a normalized input string to a canned [`Response`]. Pure: no state is
//! touched here. Theme changes and link opening come back as a
//! [`SideEffect`] for the reducer to apply.
//!
//! All commands live in one static table, [`COMMANDS`]. Adding a command means
//! adding a row and a builder function; `help` and tab completion pick it up
//! from the table.

use crate::core::content::Content;
use crate::core::line::Line;
use crate::core::theme::Theme;

/// Delay before `gui` opens the link, so its output is readable first.
pub const GUI_OPEN_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    OpenLink { url: String, delay_ms: u64 },
    SetTheme(Theme),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Lines(Vec<Line>),
    /// Wipe the output buffer
    Clear,
    WithEffect { lines: Vec<Line>, effect: SideEffect },
}

impl Response {
    pub fn lines(&self) -> &[Line] {
        match self {
            Response::Lines(lines) | Response::WithEffect { lines, .. } => lines,
            Response::Clear => &[],
        }
    }
}

/// Everything a builder may read.
pub struct Invocation<'a> {
    pub content: &'a Content,
    pub theme: Theme,
    /// Whitespace-separated words after the command name, lowercased
    pub args: &'a [&'a str],
}

pub struct CommandSpec {
    pub name: &'static str,
    pub summary: &'static str,
    /// Shown in `help` and offered by tab completion
    pub listed: bool,
    pub takes_args: bool,
    build: fn(&Invocation<'_>) -> Response,
}

impl CommandSpec {
    const fn new(
        name: &'static str,
        summary: &'static str,
        build: fn(&Invocation<'_>) -> Response,
    ) -> Self {
        Self {
            name,
            summary,
            listed: true,
            takes_args: false,
            build,
        }
    }

    const fn with_args(self) -> Self {
        Self {
            takes_args: true,
            ..self
        }
    }

    const fn unlisted(self) -> Self {
        Self {
            listed: false,
            ..self
        }
    }
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec::new("help", "Show this help message", help),
    CommandSpec::new("about", "About me", about),
    CommandSpec::new("skills", "Technical skills", skills),
    CommandSpec::new("education", "Educational background", education),
    CommandSpec::new("certifications", "Certifications", certifications),
    CommandSpec::new("projects", "Portfolio projects", projects),
    CommandSpec::new("gui", "View GUI version of portfolio", gui),
    CommandSpec::new("contact", "Contact information", contact),
    CommandSpec::new("email", "Send me an email", email),
    CommandSpec::new("themes", "List available themes", themes),
    CommandSpec::new("theme", "Switch theme (theme <name>)", theme).with_args(),
    CommandSpec::new("clear", "Clear terminal", clear),
    CommandSpec::new("whoami", "Current user info", whoami),
    CommandSpec::new("welcome", "Show the welcome banner", welcome).unlisted(),
];

/// Names offered by tab completion, in table order.
pub fn completion_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().filter(|c| c.listed).map(|c| c.name)
}

/// Trim and case-fold raw input.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Interpret raw input against the command table.
pub fn interpret(input: &str, content: &Content, theme: Theme) -> Response {
    let normalized = normalize(input);
    let mut words = normalized.split_whitespace();

    let Some(name) = words.next() else {
        return Response::Lines(Vec::new());
    };
    let args: Vec<&str> = words.collect();

    match COMMANDS.iter().find(|c| c.name == name) {
        Some(spec) if spec.takes_args || args.is_empty() => (spec.build)(&Invocation {
            content,
            theme,
            args: &args,
        }),
        _ => not_found(input.trim()),
    }
}

fn not_found(input: &str) -> Response {
    Response::Lines(vec![
        Line::error(format!("❌ Command not found: {input}")),
        Line::output("💡 Type \"help\" for available commands."),
    ])
}

// ── Builders ────────────────────────────────────────────────────────────────

fn help(_: &Invocation<'_>) -> Response {
    let width = COMMANDS.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let mut lines = vec![Line::info("Available Commands:")];
    lines.extend(
        COMMANDS
            .iter()
            .filter(|c| c.listed)
            .map(|c| Line::output(format!("  {:<width$} - {}", c.name, c.summary))),
    );
    Response::Lines(lines)
}

fn section(inv: &Invocation<'_>, name: &str) -> Response {
    Response::Lines(inv.content.section(name).to_vec())
}

fn about(inv: &Invocation<'_>) -> Response {
    section(inv, "about")
}

fn skills(inv: &Invocation<'_>) -> Response {
    section(inv, "skills")
}

fn education(inv: &Invocation<'_>) -> Response {
    section(inv, "education")
}

fn certifications(inv: &Invocation<'_>) -> Response {
    section(inv, "certifications")
}

fn contact(inv: &Invocation<'_>) -> Response {
    section(inv, "contact")
}

fn whoami(inv: &Invocation<'_>) -> Response {
    section(inv, "whoami")
}

fn projects(inv: &Invocation<'_>) -> Response {
    let mut lines = vec![Line::success("Portfolio Projects"), Line::blank()];
    for (i, project) in inv.content.projects.iter().enumerate() {
        lines.push(Line::info(format!("> Project {}: {}", i + 1, project.title)));
        lines.extend(project.summary.iter().map(Line::output));
        if !project.technologies.is_empty() {
            lines.push(Line::output(format!(
                "Technologies: {}",
                project.technologies.join(", ")
            )));
        }
        if let Some(github) = &project.github {
            lines.push(Line::output(format!("[git] GitHub: {github}")));
        }
        if let Some(demo) = &project.demo {
            lines.push(Line::output(format!("[web] Live Demo: {demo}")));
        }
        lines.push(Line::blank());
    }
    Response::Lines(lines)
}

fn gui(inv: &Invocation<'_>) -> Response {
    Response::WithEffect {
        lines: vec![
            Line::success("Opening GUI Portfolio..."),
            Line::output("Launching in new tab..."),
        ],
        effect: SideEffect::OpenLink {
            url: inv.content.profile.gui_url.clone(),
            delay_ms: GUI_OPEN_DELAY_MS,
        },
    }
}

fn email(inv: &Invocation<'_>) -> Response {
    Response::WithEffect {
        lines: vec![Line::success("Opening Email Client...")],
        effect: SideEffect::OpenLink {
            url: format!("mailto:{}", inv.content.profile.email),
            delay_ms: 0,
        },
    }
}

fn themes(inv: &Invocation<'_>) -> Response {
    let mut lines = vec![Line::info("Available Themes:")];
    lines.extend(Theme::ALL.into_iter().map(|t| {
        let marker = if t == inv.theme { "*" } else { " " };
        Line::output(format!("  {marker} {:<10} - {}", t.id(), t.display_name()))
    }));
    lines.push(Line::blank());
    lines.push(Line::output("Use \"theme <name>\" to switch."));
    Response::Lines(lines)
}

fn theme(inv: &Invocation<'_>) -> Response {
    match inv.args {
        [] => themes(inv),
        [name] => match Theme::from_id(name) {
            Some(t) => Response::WithEffect {
                lines: vec![Line::success(format!(
                    "Theme changed to {}",
                    t.display_name()
                ))],
                effect: SideEffect::SetTheme(t),
            },
            None => invalid_theme(name),
        },
        args => invalid_theme(&args.join(" ")),
    }
}

fn invalid_theme(arg: &str) -> Response {
    Response::Lines(vec![
        Line::error(format!("❌ Unknown theme: {arg}")),
        Line::info(format!("Available themes: {}", Theme::id_list())),
    ])
}

fn clear(_: &Invocation<'_>) -> Response {
    Response::Clear
}

fn welcome(inv: &Invocation<'_>) -> Response {
    let content = inv.content;
    let mut lines = vec![Line::blank()];
    lines.extend(content.banner.iter().map(Line::output));
    lines.push(Line::blank());
    if let Some(tagline) = &content.tagline {
        lines.push(Line::output(tagline));
        lines.push(Line::blank());
    }
    lines.extend(content.welcome.iter().map(Line::output));
    Response::Lines(lines)
}
