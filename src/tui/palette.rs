//! Colours for each [`Theme`].
//!
//! The engine only knows theme identifiers; this is where they become
//! terminal colours. Line kinds map onto palette slots the same way in every
//! theme, so switching themes never changes what a line means.

use ratatui::style::{Color, Modifier, Style};

use crate::core::line::LineKind;
use crate::core::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub prompt: Color,
    pub error: Color,
    pub success: Color,
    pub info: Color,
    pub border: Color,
    pub header: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Matrix => Self {
                text: Color::Rgb(0, 255, 65),
                prompt: Color::Rgb(57, 255, 20),
                error: Color::Rgb(255, 85, 85),
                success: Color::Rgb(80, 250, 123),
                info: Color::Rgb(139, 233, 253),
                border: Color::Rgb(0, 100, 30),
                header: Color::Rgb(0, 180, 50),
            },
            Theme::Cyberpunk => Self {
                text: Color::Rgb(224, 176, 255),
                prompt: Color::Rgb(255, 0, 255),
                error: Color::Rgb(255, 85, 120),
                success: Color::Rgb(0, 255, 200),
                info: Color::Rgb(0, 200, 255),
                border: Color::Rgb(110, 40, 160),
                header: Color::Rgb(190, 120, 255),
            },
            Theme::Retro => Self {
                text: Color::Rgb(255, 176, 0),
                prompt: Color::Rgb(255, 204, 102),
                error: Color::Rgb(255, 100, 60),
                success: Color::Rgb(255, 215, 0),
                info: Color::Rgb(255, 190, 120),
                border: Color::Rgb(120, 80, 0),
                header: Color::Rgb(220, 150, 0),
            },
            Theme::Ocean => Self {
                text: Color::Rgb(125, 211, 252),
                prompt: Color::Rgb(56, 189, 248),
                error: Color::Rgb(248, 113, 113),
                success: Color::Rgb(52, 211, 153),
                info: Color::Rgb(165, 243, 252),
                border: Color::Rgb(30, 64, 120),
                header: Color::Rgb(96, 165, 250),
            },
            Theme::Default => Self {
                text: Color::Gray,
                prompt: Color::Green,
                error: Color::Red,
                success: Color::Green,
                info: Color::Cyan,
                border: Color::DarkGray,
                header: Color::White,
            },
        }
    }

    pub fn line_style(&self, kind: LineKind) -> Style {
        let color = match kind {
            LineKind::Command => self.prompt,
            LineKind::Output => self.text,
            LineKind::Error => self.error,
            LineKind::Success => self.success,
            LineKind::Info => self.info,
        };
        Style::default().fg(color)
    }

    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.prompt).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
