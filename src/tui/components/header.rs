//! # Header Component
//!
//! The one-row window chrome above the terminal:
//!
//! ```text
//! ● ● ●  guest@portfolio:~$                      Matrix Green │ 14:03:27
//! ```
//!
//! Stateless. Every field is a prop from the parent; the clock string is
//! formatted by the caller so tests can pin it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct Header<'a> {
    pub host: &'a str,
    pub theme: Theme,
    /// Pre-formatted local time, e.g. "14:03:27"
    pub clock: String,
}

impl<'a> Header<'a> {
    pub fn new(host: &'a str, theme: Theme, clock: String) -> Self {
        Self { host, theme, clock }
    }

    /// Local wall-clock time in the header's format.
    pub fn local_clock() -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.theme);
        let status = format!("{} │ {}", self.theme.display_name(), self.clock);
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(status.chars().count() as u16 + 1),
        ])
        .areas(area);

        let dots = Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Red)),
            Span::styled("● ", Style::default().fg(Color::Yellow)),
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::raw(" "),
            Span::styled(
                format!("guest@{}:~$", self.host),
                Style::default().fg(palette.header),
            ),
        ]);
        frame.render_widget(Paragraph::new(dots), left);

        let status = Paragraph::new(Span::styled(status, Style::default().fg(palette.header)))
            .alignment(Alignment::Right);
        frame.render_widget(status, right);
    }
}
