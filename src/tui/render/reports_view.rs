use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::message_line;

/// Completion figures over messages and events, plus the unread shortlist
pub fn render_reports_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let width = area.width as usize;
    let stats = app.dashboard.report_stats(app.now);
    let header = Style::default()
        .fg(theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let figure = |label: &'static str, value: usize, color: Color| {
        Line::from(vec![
            Span::styled(format!(" {:<11}", label), Style::default().fg(theme.dim).bg(bg)),
            Span::styled(
                value.to_string(),
                Style::default().fg(color).bg(bg).add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(" Reports", header)),
        Line::from(""),
        figure("Completed", stats.completed, theme.green),
        figure("Pending", stats.pending, theme.yellow),
        figure("Total", stats.total, theme.text),
        Line::from(""),
        Line::from(Span::styled(" Unread", header)),
    ];

    let unread = app.dashboard.unread();
    if unread.is_empty() {
        lines.push(Line::from(Span::styled(
            " All caught up",
            Style::default().fg(theme.dim).bg(bg),
        )));
    }
    for (i, m) in unread.iter().enumerate() {
        lines.push(message_line(theme, m, width, i == app.list_cursor));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
