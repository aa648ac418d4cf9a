//! # Splash Component
//!
//! Boot screen shown while the core `Loader` runs. Finished steps get a
//! check mark, the current one is typed out with a cursor, and the whole
//! screen dims during the fade-out.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::content::LoaderStep;
use crate::core::loader::{Loader, LoaderPhase};
use crate::tui::component::Component;
use crate::tui::components::output_view::CURSOR;
use crate::tui::palette::Palette;

pub struct Splash<'a> {
    pub loader: &'a Loader,
    pub steps: &'a [LoaderStep],
    pub palette: Palette,
}

impl<'a> Splash<'a> {
    pub fn new(loader: &'a Loader, steps: &'a [LoaderStep], palette: Palette) -> Self {
        Self {
            loader,
            steps,
            palette,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let done_style = Style::default().fg(self.palette.success);
        let text_style = Style::default().fg(self.palette.text);

        let finished = match self.loader.phase() {
            LoaderPhase::Step(i) => i,
            _ => self.steps.len(),
        };

        let mut lines: Vec<Line> = self.steps[..finished.min(self.steps.len())]
            .iter()
            .map(|step| {
                Line::from(vec![
                    Span::styled("✓ ", done_style),
                    Span::styled(step.message.as_str(), text_style),
                ])
            })
            .collect();

        if let LoaderPhase::Step(_) = self.loader.phase() {
            let mut current = vec![
                Span::styled("> ", Style::default().fg(self.palette.prompt)),
                Span::styled(self.loader.visible().to_string(), text_style),
            ];
            if self.loader.is_typing() {
                current.push(Span::styled(
                    CURSOR,
                    text_style.add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            lines.push(Line::from(current));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Press Enter to skip",
            Style::default()
                .fg(self.palette.border)
                .add_modifier(Modifier::ITALIC),
        )));
        lines
    }
}

impl Component for Splash<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = self.lines();
        let fading = self.loader.phase() == LoaderPhase::Fading;
        if fading {
            for line in &mut lines {
                line.style = line.style.add_modifier(Modifier::DIM);
                for span in &mut line.spans {
                    span.style = span.style.add_modifier(Modifier::DIM);
                }
            }
        }

        let width = lines
            .iter()
            .map(|l| l.width() as u16)
            .max()
            .unwrap_or(0)
            .max(36)
            + 4;
        let height = self.steps.len() as u16 + 5;
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [boxed] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);

        let title = format!(" termfolio v{} ", env!("CARGO_PKG_VERSION"));
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border_style())
            .title(title)
            .title_alignment(Alignment::Center);

        frame.render_widget(Paragraph::new(lines).block(block), boxed);
    }
}
