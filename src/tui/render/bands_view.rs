use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ops::grouping::{Lane, LaneEntry};
use crate::tui::app::App;
use crate::tui::theme::parse_hex_color;
use crate::util::unicode;

use super::helpers::message_line;

/// Home view: people and project strip above the three band lanes
pub fn render_bands_view(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    render_strip(frame, app, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);

    for (i, lane) in app.lanes().iter().enumerate() {
        if let Some(col) = columns.get(i) {
            render_lane(frame, app, lane, i == app.lane, *col);
        }
    }
}

/// Inner-circle avatars and project bubbles
fn render_strip(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let dim = Style::default().fg(theme.dim).bg(bg);

    let mut people = vec![Span::styled(" People   ", dim)];
    for c in app.dashboard.inner_circle() {
        let selected = app.dashboard.selected_contact() == Some(c.id.as_str());
        let style = if selected {
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent).bg(bg)
        };
        people.push(Span::styled(format!("({})", c.initial()), style));
        people.push(Span::styled(
            format!(" {}  ", c.first_name()),
            Style::default().fg(theme.text).bg(bg),
        ));
    }

    let mut projects = vec![Span::styled(" Projects ", dim)];
    for (i, p) in app.dashboard.visible_projects().iter().enumerate() {
        let color = parse_hex_color(&p.color).unwrap_or(theme.accent);
        let focused = i == app.project_cursor;
        let bubble_bg = if focused { theme.selection_bg } else { bg };
        projects.push(Span::styled("\u{25CF} ", Style::default().fg(color).bg(bubble_bg)));
        projects.push(Span::styled(
            format!("{} {}", p.name, p.message_count),
            Style::default().fg(theme.text).bg(bubble_bg),
        ));
        projects.push(Span::styled("  ", Style::default().bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(vec![Line::from(people), Line::from(projects)])
            .style(Style::default().bg(bg)),
        area,
    );
}

fn render_lane(frame: &mut Frame, app: &App, lane: &Lane, focused: bool, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let band_color = theme.band_color(lane.band);
    let border = if focused { theme.accent } else { theme.dim };

    let title = format!(" {} ({}) ", lane.band.label(), lane.message_count());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .title(Span::styled(
            title,
            Style::default()
                .fg(band_color)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }
    let width = inner.width as usize;

    if lane.entries.is_empty() {
        let empty = Line::from(Span::styled(
            unicode::truncate_to_width(lane.band.description(), width),
            Style::default().fg(theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(empty), inner);
        return;
    }

    let height = inner.height as usize;
    let cursor = if focused { Some(app.row) } else { None };
    let scroll = cursor.map_or(0, |row| row.saturating_sub(height.saturating_sub(1)));

    let lines: Vec<Line> = lane
        .entries
        .iter()
        .enumerate()
        .skip(scroll)
        .take(height)
        .map(|(i, entry)| entry_line(app, entry, width, cursor == Some(i)))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn entry_line<'a>(app: &App, entry: &LaneEntry, width: usize, selected: bool) -> Line<'a> {
    let theme = &app.theme;
    match entry {
        LaneEntry::Single(m) => {
            let dragging = app.drag.as_ref().filter(|d| d.message_id == m.id);
            match dragging {
                Some(drag) => {
                    let arrow = if drag.offset >= 0 { "\u{2192}" } else { "\u{2190}" };
                    let label = format!("{} {:+} {}", arrow, drag.offset, m.subject);
                    Line::from(Span::styled(
                        unicode::fit_to_width(&label, width),
                        Style::default()
                            .fg(theme.background)
                            .bg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ))
                }
                None => message_line(theme, m, width, selected),
            }
        }
        LaneEntry::Bundle { label, messages, .. } => {
            let bg = if selected { theme.selection_bg } else { theme.background };
            let text = format!("\u{25B8} {} ({})", label, messages.len());
            Line::from(Span::styled(
                unicode::fit_to_width(&text, width),
                Style::default()
                    .fg(theme.accent)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ))
        }
    }
}
