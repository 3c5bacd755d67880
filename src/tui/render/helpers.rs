use chrono::NaiveDateTime;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::model::Message;
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Create a centered rectangle of the given percentage of the parent
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Bordered overlay block with a bold title
pub(super) fn overlay_block<'a>(theme: &Theme, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent).bg(theme.background))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.background))
}

/// `Jan 31 09:30`
pub(super) fn short_datetime(dt: NaiveDateTime) -> String {
    dt.format("%b %-d %H:%M").to_string()
}

/// Flags in front of a message row: pin, unread dot, attachment
pub(super) fn message_marks(m: &Message) -> String {
    let mut marks = String::with_capacity(3);
    marks.push(if m.pinned { '\u{2605}' } else { ' ' });
    marks.push(if m.read { ' ' } else { '\u{2022}' });
    marks.push(if m.has_attachment { '+' } else { ' ' });
    marks
}

/// One-line message summary: marks, sender, subject
pub(super) fn message_line<'a>(theme: &Theme, m: &Message, width: usize, selected: bool) -> Line<'a> {
    let bg = if selected { theme.selection_bg } else { theme.background };
    let marks = message_marks(m);
    let sender = unicode::fit_to_width(m.from.first_name(), 10);
    let used = unicode::display_width(&marks) + 1 + 10 + 1;
    let subject = unicode::fit_to_width(&m.subject, width.saturating_sub(used));
    let subject_style = if m.read {
        Style::default().fg(theme.text).bg(bg)
    } else {
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::styled(marks, Style::default().fg(theme.accent).bg(bg)),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            sender,
            Style::default().fg(theme.relationship_color(m.from.relationship)).bg(bg),
        ),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(subject, subject_style),
    ])
}
