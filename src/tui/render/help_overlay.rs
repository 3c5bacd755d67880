use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::model::SliderPosition;
use crate::tui::app::App;

use super::helpers::{centered_rect, overlay_block};

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 90, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.accent)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    // Context-sensitive help
    match app.dashboard.slider() {
        SliderPosition::Home => {
            lines.push(Line::from(Span::styled(" Lanes", header_style)));
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move within lane", key_style, desc_style);
            add_binding(&mut lines, " Tab/\u{2192}", "Next lane", key_style, desc_style);
            add_binding(&mut lines, " Enter", "Open message", key_style, desc_style);
            add_binding(&mut lines, " p", "Pin / unpin", key_style, desc_style);
            add_binding(&mut lines, " x", "Resolve", key_style, desc_style);
            add_binding(&mut lines, " H/L", "Drag card (release: Space)", key_style, desc_style);
            add_binding(&mut lines, " g", "Toggle smart grouping", key_style, desc_style);
        }
        SliderPosition::Calendar => {
            lines.push(Line::from(Span::styled(" Calendar", header_style)));
            add_binding(&mut lines, " arrows", "Move between cells", key_style, desc_style);
            add_binding(&mut lines, " Enter", "Open event / quick agenda", key_style, desc_style);
        }
        SliderPosition::Collab => {
            lines.push(Line::from(Span::styled(" People", header_style)));
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " Enter", "Filter by contact", key_style, desc_style);
            add_binding(&mut lines, " Esc", "Clear filter", key_style, desc_style);
        }
        SliderPosition::Junk | SliderPosition::Reports => {
            lines.push(Line::from(Span::styled(" List", header_style)));
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " Enter", "Open message", key_style, desc_style);
        }
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Modes & Views", header_style)));
    add_binding(&mut lines, " 1-4", "Startup / Academic / Career / Zen", key_style, desc_style);
    add_binding(&mut lines, " h c J C R", "Home Collab Junk Calendar Reports", key_style, desc_style);
    add_binding(&mut lines, " [ ]", "Previous / next project", key_style, desc_style);
    add_binding(&mut lines, " t", "Thread map for project", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " n", "Compose", key_style, desc_style);
    add_binding(&mut lines, " a", "Meeting ROI", key_style, desc_style);
    add_binding(&mut lines, " s", "Sacrifice report", key_style, desc_style);
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let paragraph = Paragraph::new(lines)
        .block(overlay_block(&app.theme, "Key Bindings"))
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 14;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
