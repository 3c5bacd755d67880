use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// Contacts, closest first, with their message counts
pub fn render_collab_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let width = area.width as usize;

    let mut lines = vec![
        Line::from(Span::styled(
            " People",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let contacts = app.dashboard.contacts_by_closeness();
    if contacts.is_empty() {
        lines.push(Line::from(Span::styled(
            " No contacts",
            Style::default().fg(theme.dim).bg(bg),
        )));
    }

    let selected = app.dashboard.selected_contact();
    for (i, c) in contacts.iter().enumerate() {
        let row_bg = if i == app.list_cursor { theme.selection_bg } else { bg };
        let count = app
            .dashboard
            .messages()
            .iter()
            .filter(|m| m.from.id == c.id)
            .count();
        let marker = if selected == Some(c.id.as_str()) { "\u{25B8}" } else { " " };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(theme.accent).bg(row_bg)),
            Span::styled(
                format!("({}) ", c.initial()),
                Style::default().fg(theme.accent).bg(row_bg),
            ),
            Span::styled(
                unicode::fit_to_width(&c.name, 24),
                Style::default()
                    .fg(theme.relationship_color(c.relationship))
                    .bg(row_bg),
            ),
            Span::styled(
                format!(" {:<13}", c.relationship.as_str()),
                Style::default().fg(theme.dim).bg(row_bg),
            ),
            Span::styled(
                format!("{:>3} msgs", count),
                Style::default().fg(theme.text).bg(row_bg),
            ),
        ];
        if selected == Some(c.id.as_str()) {
            spans.push(Span::styled(
                "  filtering",
                Style::default().fg(theme.accent).bg(row_bg),
            ));
        }
        let used = super::helpers::spans_width(&spans);
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(row_bg)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}
