//! # Prompt Component
//!
//! The live input line: `visitor@portfolio:~$ ` followed by what the visitor
//! has typed so far.
//!
//! The buffer itself lives in the core `InputController`; this component only
//! draws it. When the text is wider than the row, the view scrolls
//! horizontally so the end (and the cursor) stays visible. Widths are
//! measured in terminal columns with `unicode-width`, not bytes.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct Prompt<'a> {
    pub prompt: &'a str,
    pub buffer: &'a str,
    pub palette: Palette,
    /// Place the terminal cursor after the input
    pub focused: bool,
}

impl<'a> Prompt<'a> {
    pub fn new(prompt: &'a str, buffer: &'a str, palette: Palette, focused: bool) -> Self {
        Self {
            prompt,
            buffer,
            palette,
            focused,
        }
    }
}

/// Drop characters from the front of `text` until it fits in `width`
/// columns. Returns the visible tail and its width.
fn visible_tail(text: &str, width: usize) -> (&str, usize) {
    let mut total = text.width();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if total <= width {
            break;
        }
        total -= c.width().unwrap_or(0);
        start = i + c.len_utf8();
    }
    (&text[start..], total)
}

impl Component for Prompt<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let prompt_width = self.prompt.width();
        // Keep one column free for the cursor
        let room = (area.width as usize).saturating_sub(1);

        let line = if prompt_width + self.buffer.width() <= room {
            Line::from(vec![
                Span::styled(self.prompt, self.palette.prompt_style()),
                Span::styled(self.buffer, Style::default().fg(self.palette.text)),
            ])
        } else {
            // Too wide: the typed text wins over the prompt
            let (tail, _) = visible_tail(self.buffer, room);
            Line::from(Span::styled(tail, Style::default().fg(self.palette.text)))
        };
        let used = line.width() as u16;
        frame.render_widget(Paragraph::new(line), area);

        if self.focused {
            let x = area.x + used.min(area.width.saturating_sub(1));
            frame.set_cursor_position((x, area.y));
        }
    }
}
