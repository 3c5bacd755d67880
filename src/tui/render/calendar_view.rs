use chrono::Duration;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::EventKind;
use crate::ops::filter::{FIRST_HOUR, LAST_HOUR, events_at, week_start};
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::short_datetime;

const HOUR_COL: usize = 6;
const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Sun-Sat week grid for the active mode, with ghost blocks listed below
pub fn render_calendar_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let today = app.now.date();
    let anchor = app.dashboard.anchor_date(today);
    let start = week_start(anchor);
    let slots = app.dashboard.week(today);
    let cell_w = (area.width as usize).saturating_sub(HOUR_COL) / 7;

    let mut lines = Vec::new();

    // Day header
    let mut header = vec![Span::styled(" ".repeat(HOUR_COL), Style::default().bg(bg))];
    for (day, name) in DAY_NAMES.iter().enumerate() {
        let date = start + Duration::days(day as i64);
        let style = if date == anchor {
            Style::default()
                .fg(theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim).bg(bg)
        };
        let label = format!("{} {}", name, date.format("%-d"));
        header.push(Span::styled(unicode::fit_to_width(&label, cell_w), style));
    }
    lines.push(Line::from(header));

    for hour in FIRST_HOUR..=LAST_HOUR {
        let mut spans = vec![Span::styled(
            format!("{:02}:00 ", hour),
            Style::default().fg(theme.dim).bg(bg),
        )];
        for day in 0..7u32 {
            let is_cursor = day == app.cal_day && hour == app.cal_hour;
            let cell_bg = if is_cursor { theme.selection_bg } else { bg };
            let events = events_at(&slots, day, hour);
            let (text, color) = match events.first() {
                Some(e) => {
                    let mut title = String::new();
                    if e.is_shadow {
                        title.push('~');
                    }
                    title.push_str(&e.title);
                    if events.len() > 1 {
                        title = format!("{} +{}", title, events.len() - 1);
                    }
                    let color = match e.kind {
                        EventKind::Meeting => theme.yellow,
                        EventKind::DeepWork => theme.accent,
                        _ => theme.text,
                    };
                    (title, color)
                }
                None if is_cursor => ("\u{00B7}".to_string(), theme.dim),
                None => (String::new(), theme.dim),
            };
            spans.push(Span::styled(
                unicode::fit_to_width(&text, cell_w),
                Style::default().fg(color).bg(cell_bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    let ghosts: Vec<_> = app
        .dashboard
        .data()
        .ghost_events
        .iter()
        .filter(|g| !g.solidified)
        .collect();
    if !ghosts.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Ghost blocks",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )));
        for g in ghosts {
            let when = g.suggested_date.map(short_datetime).unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" \u{25CC} {}", g.title),
                    Style::default().fg(theme.text).bg(bg),
                ),
                Span::styled(
                    format!("  {}  {}", when, g.snippet),
                    Style::default().fg(theme.dim).bg(bg),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusMode;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn week_grid_places_events() {
        let app = sample_app(FocusMode::Startup);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_calendar_view(frame, &app, area);
        });
        assert!(output.contains("Sun 25"));
        assert!(output.contains("Sat 31"));
        let row = output.lines().find(|l| l.starts_with("14:00")).unwrap();
        assert!(row.contains("Investor"));
        assert!(output.contains("Ghost blocks"));
        assert!(output.contains("Pitch Prep"));
    }

    #[test]
    fn other_modes_hide_startup_events() {
        let app = sample_app(FocusMode::DeepWork);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_calendar_view(frame, &app, area);
        });
        assert!(!output.contains("Investor Pitch"));
    }
}
