use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{FocusMode, SliderPosition};
use crate::tui::app::App;

/// Key that selects each slider position
fn slider_key(pos: SliderPosition) -> char {
    match pos {
        SliderPosition::Home => 'h',
        SliderPosition::Collab => 'c',
        SliderPosition::Junk => 'J',
        SliderPosition::Calendar => 'C',
        SliderPosition::Reports => 'R',
    }
}

/// Mode switcher and slider ribbon
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let header = Style::default()
        .fg(theme.dim)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(" MODES", header))];
    for (i, mode) in FocusMode::ALL.iter().enumerate() {
        let current = *mode == app.dashboard.mode();
        lines.push(entry(
            app,
            &(i + 1).to_string(),
            mode.config().name.trim_end_matches(" Mode"),
            current,
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" VIEWS", header)));
    for pos in SliderPosition::ALL {
        let current = pos == app.dashboard.slider();
        lines.push(entry(app, &slider_key(pos).to_string(), pos.label(), current));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn entry<'a>(app: &App, key: &str, label: &'a str, current: bool) -> Line<'a> {
    let theme = &app.theme;
    let bg = if current { theme.selection_bg } else { theme.background };
    let label_style = if current {
        Style::default()
            .fg(theme.accent)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };
    Line::from(vec![
        Span::styled(
            if current { "\u{258C}" } else { " " },
            Style::default().fg(theme.accent).bg(bg),
        ),
        Span::styled(format!("{} ", key), Style::default().fg(theme.dim).bg(bg)),
        Span::styled(label, label_style),
    ])
}
