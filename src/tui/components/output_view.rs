//! # OutputView Component
//!
//! Scrollable view of the output buffer: every completed line, then the
//! active line's visible prefix with a block cursor.
//!
//! ## Architecture
//!
//! `OutputView` is a transient component (created each frame) that wraps
//! `&'a mut OutputViewState` (persistent state) and borrows the lines as
//! props. Completed lines never change, so their wrapped heights are cached
//! and only recomputed when the width changes or the buffer is cleared. The
//! active line is volatile and measured every frame.
//!
//! ## Following
//!
//! The view follows the bottom while the visitor hasn't scrolled away, and
//! only jumps when a line is committed to history. The active line growing
//! is merely clamped. Scrolling up detaches it; scrolling back down to the
//! end (or End) re-attaches it. A `clear` (a new buffer generation) snaps
//! back to the top.

use std::borrow::Cow;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::line::{Line, LineKind};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

pub const CURSOR: &str = "▋";

/// Scroll and layout state for the output view.
/// Must be persisted in the parent TuiState.
pub struct OutputViewState {
    pub scroll_state: ScrollViewState,
    pub layout: LayoutCache,
    /// When true, stay pinned to the bottom as content grows
    pub follow: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Canvas height at the previous frame
    last_total_height: u16,
    /// Completed line count at the previous frame
    last_completed_len: usize,
    /// Buffer generation the cached layout belongs to
    generation: u64,
}

impl Default for OutputViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            follow: true,
            viewport_height: 0,
            last_total_height: 0,
            last_completed_len: 0,
            generation: 0,
        }
    }

    fn max_offset(&self, total_height: u16) -> u16 {
        total_height.saturating_sub(self.viewport_height)
    }

    /// Re-attach follow mode if the visitor has scrolled to the end.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset(self.last_total_height);
        if self.scroll_state.offset().y >= max_y {
            self.follow = true;
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }

    /// Apply follow/clamp rules for a frame whose canvas is `total_height`.
    fn settle_offset(&mut self, total_height: u16, completed_len: usize, cleared: bool) {
        let max_y = self.max_offset(total_height);
        if cleared {
            self.follow = true;
            self.scroll_state.set_offset(Position { x: 0, y: 0 });
        } else if self.follow && completed_len > self.last_completed_len {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        } else if self.scroll_state.offset().y > max_y {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
        self.last_total_height = total_height;
        self.last_completed_len = completed_len;
    }
}

impl EventHandler for OutputViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.follow = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.follow = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollToBottom => {
                self.follow = true;
                let max_y = self.max_offset(self.last_total_height);
                self.scroll_state.set_offset(Position { x: 0, y: max_y });
            }
            _ => {}
        }
        None
    }
}

/// Scrollable output component.
/// Created fresh each frame with references to state and data.
pub struct OutputView<'a> {
    pub state: &'a mut OutputViewState,
    pub completed: &'a [Line],
    /// Output buffer generation; a change means the buffer was reset
    pub generation: u64,
    /// The line being typed and its visible prefix
    pub active: Option<(&'a Line, &'a str)>,
    pub prompt: &'a str,
    pub palette: Palette,
}

impl<'a> OutputView<'a> {
    pub fn new(
        state: &'a mut OutputViewState,
        completed: &'a [Line],
        generation: u64,
        active: Option<(&'a Line, &'a str)>,
        prompt: &'a str,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            completed,
            generation,
            active,
            prompt,
            palette,
        }
    }
}

impl Component for OutputView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let line_count = self.completed.len();

        // 1. Update layout cache for completed lines
        let cleared =
            self.generation != self.state.generation || line_count < self.state.layout.line_count;
        self.state.generation = self.generation;
        let layout = &mut self.state.layout;
        if cleared {
            layout.invalidate();
        }
        let reusable = layout.reusable_count(line_count, content_width);
        layout.heights.truncate(reusable);
        for line in self.completed.iter().skip(reusable) {
            layout
                .heights
                .push(wrap_rows(&display_text(line, self.prompt), content_width).len() as u16);
        }
        layout.rebuild_prefix_heights();
        layout.update_metadata(line_count, content_width);

        let completed_height = layout.prefix_heights.last().copied().unwrap_or(0);
        let active_rows = self.active.map(|(line, visible)| {
            let mut text = display_prefix(line, visible, self.prompt).into_owned();
            text.push_str(CURSOR);
            wrap_rows(&text, content_width)
                .into_iter()
                .map(Cow::into_owned)
                .collect::<Vec<_>>()
        });
        let active_height = active_rows.as_ref().map_or(0, |rows| rows.len() as u16);
        let total_height = completed_height.saturating_add(active_height);

        // 2. Follow / clamp
        self.state.viewport_height = area.height;
        self.state.settle_offset(total_height, line_count, cleared);

        // 3. Render the visible completed lines plus the active one
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible = self.state.layout.visible_range(scroll_offset, area.height);
        let mut y = if visible.start > 0 {
            self.state.layout.prefix_heights[visible.start - 1]
        } else {
            0
        };
        for i in visible {
            let line = &self.completed[i];
            let height = self.state.layout.heights[i];
            let text = display_text(line, self.prompt);
            let rows = styled_rows(line, &text, content_width, self.prompt, &self.palette);
            scroll_view.render_widget(
                Paragraph::new(rows),
                Rect::new(0, y, content_width, height),
            );
            y += height;
        }

        if let (Some((line, _)), Some(rows)) = (self.active, active_rows) {
            let joined = rows.join("\n");
            let mut styled = styled_rows(line, &joined, 0, self.prompt, &self.palette);
            if let Some(last) = styled.last_mut() {
                style_cursor(last);
            }
            scroll_view.render_widget(
                Paragraph::new(styled),
                Rect::new(0, completed_height, content_width, active_height),
            );
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Text as shown on screen: command lines get the prompt in front.
fn display_text<'t>(line: &'t Line, prompt: &str) -> Cow<'t, str> {
    display_prefix(line, line.text(), prompt)
}

fn display_prefix<'t>(line: &Line, visible: &'t str, prompt: &str) -> Cow<'t, str> {
    match line.kind() {
        LineKind::Command => Cow::Owned(format!("{prompt}{visible}")),
        _ => Cow::Borrowed(visible),
    }
}

fn wrap_options<'a>(width: u16) -> textwrap::Options<'a> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Split `text` into screen rows of at most `width` columns. Always at least
/// one row, so blank lines keep their vertical space.
pub fn wrap_rows(text: &str, width: u16) -> Vec<Cow<'_, str>> {
    if width == 0 || text.is_empty() {
        return vec![Cow::Borrowed(text)];
    }
    let rows = textwrap::wrap(text, wrap_options(width));
    if rows.is_empty() {
        vec![Cow::Borrowed("")]
    } else {
        rows
    }
}

/// Rows for one line, styled by kind. On command lines the prompt keeps the
/// prompt style and the typed text is plain. `width == 0` means `text` is
/// already split on '\n'.
fn styled_rows(
    line: &Line,
    text: &str,
    width: u16,
    prompt: &str,
    palette: &Palette,
) -> Vec<TextLine<'static>> {
    let rows: Vec<String> = if width == 0 {
        text.split('\n').map(str::to_string).collect()
    } else {
        wrap_rows(text, width).into_iter().map(Cow::into_owned).collect()
    };
    let style = palette.line_style(line.kind());

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            if i == 0 && line.kind() == LineKind::Command && row.starts_with(prompt.trim_end()) {
                let split = prompt.len().min(row.len());
                let (head, tail) = row.split_at(split);
                TextLine::from(vec![
                    Span::styled(head.to_string(), palette.prompt_style()),
                    Span::styled(tail.to_string(), Style::default().fg(palette.text)),
                ])
            } else {
                TextLine::from(Span::styled(row, style))
            }
        })
        .collect()
}

/// Give the trailing cursor glyph its own blinking style.
fn style_cursor(row: &mut TextLine<'static>) {
    let Some(last) = row.spans.pop() else {
        return;
    };
    let content = last.content.into_owned();
    match content.strip_suffix(CURSOR) {
        Some(rest) => {
            if !rest.is_empty() {
                row.spans.push(Span::styled(rest.to_string(), last.style));
            }
            row.spans
                .push(Span::styled(CURSOR, last.style.add_modifier(Modifier::SLOW_BLINK)));
        }
        None => row.spans.push(Span::styled(content, last.style)),
    }
}

/// Cached wrapped heights of completed lines.
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    line_count: usize,
    content_width: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            line_count: 0,
            content_width: 0,
        }
    }

    /// How many cached heights are still valid. Completed lines are
    /// immutable, so everything survives unless the width changed or the
    /// buffer shrank (cleared).
    pub fn reusable_count(&self, line_count: usize, content_width: u16) -> usize {
        if self.content_width != content_width || line_count < self.line_count {
            return 0;
        }
        self.heights.len().min(line_count)
    }

    /// Forget every cached height (the lines they measured are gone).
    pub fn invalidate(&mut self) {
        self.heights.clear();
        self.prefix_heights.clear();
        self.line_count = 0;
    }

    pub fn update_metadata(&mut self, line_count: usize, content_width: u16) {
        self.line_count = line_count;
        self.content_width = content_width;
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    pub fn visible_range(
        &self,
        scroll_offset: u16,
        viewport_height: u16,
    ) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}
