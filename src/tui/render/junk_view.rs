use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::message_line;

pub fn render_junk_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let width = area.width as usize;

    let mut lines = vec![
        Line::from(Span::styled(
            " Junk",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Low-priority mail you can safely ignore",
            Style::default().fg(theme.dim).bg(bg),
        )),
        Line::from(""),
    ];

    let junk = app.dashboard.junk();
    if junk.is_empty() {
        lines.push(Line::from(Span::styled(
            " Nothing here. Inbox hygiene achieved.",
            Style::default().fg(theme.dim).bg(bg),
        )));
    }
    for (i, m) in junk.iter().enumerate() {
        lines.push(message_line(theme, m, width, i == app.list_cursor));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusMode;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn lists_three_low_priority_messages() {
        let app = sample_app(FocusMode::Startup);
        let data = sample_data();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_junk_view(frame, &app, area);
        });
        for id in ["e7", "e18", "e21"] {
            let m = data.messages.iter().find(|m| m.id == id).unwrap();
            let head: String = m.subject.chars().take(20).collect();
            assert!(output.contains(&head), "missing {}", id);
        }
    }

    #[test]
    fn empty_junk_message() {
        let app = empty_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_junk_view(frame, &app, area);
        });
        assert!(output.contains("Nothing here"));
    }
}
