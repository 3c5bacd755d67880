use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::{centered_rect, overlay_block};

/// Project lineage, oldest node first
pub fn render_thread_map(frame: &mut Frame, app: &App, area: Rect) {
    let Some(map) = app.dashboard.open_thread_map() else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.background;
    let popup = centered_rect(60, 80, area);
    frame.render_widget(Clear, popup);

    let title = match app.dashboard.data().project(&map.project_id) {
        Some(p) => format!("Thread Map \u{00B7} {}", p.name),
        None => "Thread Map".to_string(),
    };

    let mut lines = Vec::new();
    let path = map.path();
    for (i, node) in path.iter().enumerate() {
        let color = theme.node_color(node.status);
        lines.push(Line::from(vec![
            Span::styled("\u{25CF} ", Style::default().fg(color).bg(bg)),
            Span::styled(
                node.title.clone(),
                Style::default()
                    .fg(theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                if i + 1 < path.len() { "\u{2502} " } else { "  " },
                Style::default().fg(theme.dim).bg(bg),
            ),
            Span::styled(
                format!(
                    "{} \u{00B7} {} \u{00B7} {}",
                    node.kind.as_str(),
                    node.date.format("%b %-d"),
                    node.status.as_str()
                ),
                Style::default().fg(color).bg(bg),
            ),
        ]));
    }
    if path.is_empty() {
        lines.push(Line::from(Span::styled(
            "No milestones yet",
            Style::default().fg(theme.dim).bg(bg),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(overlay_block(theme, &title))
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}
