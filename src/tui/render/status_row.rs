use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::SliderPosition;
use crate::ops::burndown::format_duration;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::spans_width;

/// Key hints shown on the right of the status row
fn hints(app: &App) -> &'static str {
    if app.drag.is_some() {
        return "H/L drag  Space release  Esc cancel";
    }
    match app.dashboard.slider() {
        SliderPosition::Home => "j/k move  Tab lane  x resolve  p pin  n compose  ? help",
        SliderPosition::Calendar => "arrows move  Enter open  ? help",
        SliderPosition::Collab => "j/k move  Enter filter  ? help",
        SliderPosition::Junk | SliderPosition::Reports => "j/k move  Enter open  ? help",
    }
}

/// Burndown on the left, key hints on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let width = area.width as usize;

    let mut spans = if app.dashboard.is_zen() {
        vec![Span::styled(
            " Burndown paused",
            Style::default().fg(theme.dim).bg(bg),
        )]
    } else {
        let b = &app.burndown;
        vec![
            Span::styled(
                format!(" Work left {}", format_duration(b.work_minutes)),
                Style::default().fg(theme.text).bg(bg),
            ),
            Span::styled(" \u{00B7} ", Style::default().fg(theme.dim).bg(bg)),
            Span::styled(
                format!("Time left {}", format_duration(b.time_minutes)),
                Style::default().fg(theme.text).bg(bg),
            ),
            Span::styled(" \u{00B7} ", Style::default().fg(theme.dim).bg(bg)),
            Span::styled(
                b.status.label(),
                Style::default()
                    .fg(theme.burndown_color(b.status))
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]
    };

    if app.config.ui.show_key_hints {
        let hint = hints(app);
        let used = spans_width(&spans);
        let hint_width = unicode::display_width(hint);
        if used + hint_width + 1 < width {
            spans.push(Span::styled(
                " ".repeat(width - used - hint_width - 1),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(hint, Style::default().fg(theme.dim).bg(bg)));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

/// Latest notice, for a few seconds after it arrives
pub fn render_toast_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let line = match app.dashboard.notices().latest() {
        Some(notice) if app.toast_visible(Instant::now()) => {
            let text = unicode::truncate_to_width(
                &format!(" {}", notice.text()),
                area.width as usize,
            );
            Line::from(Span::styled(
                text,
                Style::default().fg(theme.notice_color(notice.level)).bg(bg),
            ))
        }
        _ => Line::from(""),
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusMode;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn burndown_at_noon_is_behind() {
        let app = sample_app(FocusMode::Startup);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("Work left 15h 15m"));
        assert!(output.contains("Time left 6h 0m"));
        assert!(output.contains("Behind"));
    }

    #[test]
    fn zen_pauses_burndown() {
        let app = sample_app(FocusMode::Zen);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("Burndown paused"));
        assert!(!output.contains("Work left"));
    }

    #[test]
    fn hints_can_be_hidden() {
        let mut app = sample_app(FocusMode::Startup);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("? help"));

        app.config.ui.show_key_hints = false;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(!output.contains("? help"));
    }

    #[test]
    fn toast_shows_fresh_notice_only() {
        let mut app = sample_app(FocusMode::Startup);
        app.dashboard.resolve("e1");
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_toast_row(frame, &app, area);
        });
        assert!(output.is_empty());

        app.refresh(Instant::now(), noon());
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_toast_row(frame, &app, area);
        });
        assert!(output.contains("Email resolved! Great work."));
    }
}
