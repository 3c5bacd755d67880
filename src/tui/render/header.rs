use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// Mode name, description and contact filter, with a rule below
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let theme = &app.theme;
    let bg = theme.background;
    let cfg = app.dashboard.mode().config();

    let mut spans = vec![
        Span::styled(" \u{25C9} ", Style::default().fg(theme.accent).bg(bg)),
        Span::styled(
            cfg.name,
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(cfg.description, Style::default().fg(theme.dim).bg(bg)),
    ];

    if let Some(id) = app.dashboard.selected_contact() {
        let name = app
            .dashboard
            .data()
            .contact(id)
            .map(|c| c.name.as_str())
            .unwrap_or(id);
        spans.push(Span::styled(
            format!("  [from: {}]", name),
            Style::default().fg(theme.accent).bg(bg),
        ));
    }

    // Trim to the available width so long descriptions never wrap
    let width = chunks[0].width as usize;
    let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
    let line = if unicode::display_width(&text) > width {
        Line::from(Span::styled(
            unicode::truncate_to_width(&text, width),
            Style::default().fg(theme.text_bright).bg(bg),
        ))
    } else {
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), chunks[0]);

    let rule = "\u{2500}".repeat(chunks[1].width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(rule, Style::default().fg(theme.dim).bg(bg))),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusMode;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_shows_mode_and_filter() {
        let mut app = sample_app(FocusMode::Academic);
        app.dashboard.select_contact(Some("c2"));
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.contains("Academic Mode"));
        assert!(output.contains("[from: Prof. Venkatesh Iyer]"));
    }

    #[test]
    fn header_truncates_on_narrow_terminal() {
        let app = sample_app(FocusMode::Startup);
        let output = render_to_string(30, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        let first = output.lines().next().unwrap_or_default();
        assert!(first.ends_with('\u{2026}'));
    }
}
