use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};

use crate::model::Message;
use crate::parse::{Segment, highlight_segments};
use crate::tui::app::App;
use crate::tui::theme::Theme;

use super::helpers::{centered_rect, overlay_block, short_datetime};

/// Full message overlay with `[[...]]` runs highlighted
pub fn render_detail_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(m) = app.dashboard.open_message_detail() else {
        return;
    };
    let theme = &app.theme;
    let popup = centered_rect(80, 85, area);
    frame.render_widget(Clear, popup);

    let block = overlay_block(theme, "Message");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let paragraph = Paragraph::new(detail_lines(theme, m))
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, inner);
}

fn detail_lines(theme: &Theme, m: &Message) -> Vec<Line<'static>> {
    let bg = theme.background;
    let dim = Style::default().fg(theme.dim).bg(bg);
    let text = Style::default().fg(theme.text).bg(bg);

    let mut lines = vec![
        Line::from(Span::styled(
            m.subject.clone(),
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("From  ", dim),
            Span::styled(
                m.from.name.clone(),
                Style::default()
                    .fg(theme.relationship_color(m.from.relationship))
                    .bg(bg),
            ),
            Span::styled(format!(" <{}>", m.from.email), dim),
        ]),
        Line::from(vec![
            Span::styled("Sent  ", dim),
            Span::styled(short_datetime(m.timestamp), text),
            Span::styled("  ", dim),
            Span::styled(
                m.band.label(),
                Style::default().fg(theme.band_color(m.band)).bg(bg),
            ),
            Span::styled(" \u{00B7} ", dim),
            Span::styled(
                m.priority.as_str(),
                Style::default().fg(theme.priority_color(m.priority)).bg(bg),
            ),
        ]),
    ];

    if let Some(deadline) = m.deadline {
        lines.push(Line::from(vec![
            Span::styled("Due   ", dim),
            Span::styled(short_datetime(deadline), Style::default().fg(theme.red).bg(bg)),
        ]));
    }
    if !m.tags.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tags  ", dim),
            Span::styled(m.tags.join(", "), text),
        ]));
    }
    lines.push(Line::from(""));

    let highlight = Style::default()
        .fg(theme.highlight_fg)
        .bg(theme.highlight_bg)
        .add_modifier(Modifier::BOLD);
    for raw in m.body_or_placeholder().lines() {
        let spans: Vec<Span<'static>> = highlight_segments(raw)
            .into_iter()
            .map(|seg| match seg {
                Segment::Plain(s) => Span::styled(s.to_string(), text),
                Segment::Highlight(s) => Span::styled(s.to_string(), highlight),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let pin = if m.pinned { "p unpin" } else { "p pin" };
    lines.push(Line::from(Span::styled(
        format!("{}  x resolve  Esc close", pin),
        dim,
    )));
    lines
}
