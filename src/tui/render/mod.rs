pub mod bands_view;
pub mod calendar_view;
pub mod collab_view;
pub mod compose_view;
pub mod detail_view;
pub mod header;
pub mod help_overlay;
pub mod junk_view;
pub mod report_overlays;
pub mod reports_view;
pub mod sidebar;
pub mod status_row;
pub mod thread_map_view;
pub mod zen_view;

mod helpers;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::model::SliderPosition;
use crate::store::Modal;

use super::app::App;

/// Width of the mode/slider ribbon on the left
pub const SIDEBAR_WIDTH: u16 = 20;

/// Main render function: dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | body | burndown row | toast row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // mode name + separator
            Constraint::Min(1),    // sidebar + content
            Constraint::Length(1), // burndown / hints
            Constraint::Length(1), // toast
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(chunks[1]);

    sidebar::render_sidebar(frame, app, body[0]);

    // Zen replaces the home lanes; other slider views still work
    match app.dashboard.slider() {
        SliderPosition::Home if app.dashboard.is_zen() => {
            zen_view::render_zen_view(frame, app, body[1])
        }
        SliderPosition::Home => bands_view::render_bands_view(frame, app, body[1]),
        SliderPosition::Collab => collab_view::render_collab_view(frame, app, body[1]),
        SliderPosition::Junk => junk_view::render_junk_view(frame, app, body[1]),
        SliderPosition::Calendar => calendar_view::render_calendar_view(frame, app, body[1]),
        SliderPosition::Reports => reports_view::render_reports_view(frame, app, body[1]),
    }

    status_row::render_status_row(frame, app, chunks[2]);
    status_row::render_toast_row(frame, app, chunks[3]);

    // Overlays (rendered on top of everything)
    match app.dashboard.modal() {
        Modal::None => {}
        Modal::Message(_) => detail_view::render_detail_view(frame, app, area),
        Modal::Compose => compose_view::render_compose_view(frame, app, area),
        Modal::Roi => report_overlays::render_roi_overlay(frame, app, area),
        Modal::Sacrifice => report_overlays::render_sacrifice_overlay(frame, app, area),
        Modal::ThreadMap(_) => thread_map_view::render_thread_map(frame, app, area),
    }
    if app.agenda.is_some() {
        compose_view::render_agenda_view(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}
