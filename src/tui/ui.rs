use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, BorderType};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Header, OutputView, Prompt, Splash};
use crate::tui::palette::Palette;

/// Split the frame into header row and terminal body.
pub fn screen_areas(area: Rect) -> (Rect, Rect) {
    use Constraint::{Length, Min};
    let [header, body] = Layout::vertical([Length(1), Min(0)]).areas(area);
    (header, body)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, clock: &str) {
    let palette = Palette::for_theme(app.theme);
    let (header_area, body_area) = screen_areas(frame.area());

    Header::new(&app.content.profile.host, app.theme, clock.to_string())
        .render(frame, header_area);

    if let Some(loader) = &app.loader {
        Splash::new(loader, &app.content.loader, palette).render(frame, body_area);
        return;
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style());
    let inner = block.inner(body_area);
    frame.render_widget(block, body_area);

    let [output_area, prompt_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let prompt = app.content.prompt();
    let active = app.output.active().zip(app.active_text());
    OutputView::new(
        &mut tui.output_view,
        app.output.completed(),
        app.output.generation(),
        active,
        &prompt,
        palette,
    )
    .render(frame, output_area);

    Prompt::new(&prompt, app.input.buffer(), palette, true).render(frame, prompt_area);
}
