use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::app::App;

use super::helpers::short_datetime;

/// Calm home view for zen mode: no lanes, only the nearest deadline
pub fn render_zen_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let vibe = app.dashboard.mode().config().vibe;

    let mut lines = Vec::new();
    let pad = area.height.saturating_sub(6) / 2;
    for _ in 0..pad {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Breathe. The inbox can wait.",
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        vibe.to_string(),
        Style::default().fg(theme.dim).bg(bg),
    )));
    lines.push(Line::from(""));

    match app.dashboard.next_deadline(app.now) {
        Some(m) => {
            lines.push(Line::from(Span::styled(
                "Next deadline",
                Style::default().fg(theme.accent).bg(bg),
            )));
            let when = m.deadline.map(short_datetime).unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(m.subject.clone(), Style::default().fg(theme.text).bg(bg)),
                Span::styled(format!("  {}", when), Style::default().fg(theme.dim).bg(bg)),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Nothing due. Enjoy the quiet.",
                Style::default().fg(theme.dim).bg(bg),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
