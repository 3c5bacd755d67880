use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::{centered_rect, overlay_block};

const SCORE_BAR: usize = 20;

/// Meeting hours against what came out of them
pub fn render_roi_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let roi = app.dashboard.meeting_roi();
    let popup = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup);

    let label = Style::default().fg(theme.dim).bg(bg);
    let value = Style::default().fg(theme.text_bright).bg(bg);
    let score_color = match roi.score {
        0..=30 => theme.red,
        31..=60 => theme.yellow,
        _ => theme.green,
    };
    let filled = (roi.score as usize * SCORE_BAR) / 100;

    let lines = vec![
        Line::from(vec![
            Span::styled("Meeting hours     ", label),
            Span::styled(format!("{:.1}h", roi.meeting_hours), value),
        ]),
        Line::from(vec![
            Span::styled("Action items      ", label),
            Span::styled(roi.action_items_closed.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Decisions made    ", label),
            Span::styled(roi.decisions_made.to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Score             ", label),
            Span::styled(
                format!("{}/100 ", roi.score),
                Style::default()
                    .fg(score_color)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("\u{2588}".repeat(filled), Style::default().fg(score_color).bg(bg)),
            Span::styled(
                "\u{2591}".repeat(SCORE_BAR - filled),
                Style::default().fg(theme.dim).bg(bg),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("s sacrifice report  Esc close", label)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(overlay_block(theme, "Meeting ROI"))
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}

/// Time the active mode lost to other contexts, then totals for every context
pub fn render_sacrifice_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let report = app.dashboard.sacrifice_report();
    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);

    let dim = Style::default().fg(theme.dim).bg(bg);
    let text = Style::default().fg(theme.text).bg(bg);
    let header = Style::default()
        .fg(theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} lost ", report.mode.config().name), header),
        Span::styled(
            format!("{:.1}h", report.total_hours),
            Style::default()
                .fg(theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if report.events.is_empty() {
        lines.push(Line::from(Span::styled("Nothing displaced this mode.", dim)));
    }
    for culprit in &report.culprits {
        lines.push(Line::from(vec![
            Span::styled(format!("  to {:<12}", culprit.context), text),
            Span::styled(format!("{:.1}h", culprit.hours), dim),
        ]));
    }
    for id in &report.events {
        if let Some(e) = app.dashboard.event(id) {
            let original = e.original_title.as_deref().unwrap_or("(untitled)");
            lines.push(Line::from(Span::styled(
                format!("  {} \u{2192} {}", original, e.title),
                dim,
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("All contexts", header)));
    let totals = app.dashboard.sacrifice_totals();
    if totals.is_empty() {
        lines.push(Line::from(Span::styled("  none", dim)));
    }
    for loss in totals {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", loss.context.as_str()), text),
            Span::styled(format!("{:.1}h", loss.hours), dim),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(overlay_block(theme, "Sacrifice Report"))
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusMode;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn roi_shows_score() {
        let app = sample_app(FocusMode::Startup);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_roi_overlay(frame, &app, area);
        });
        assert!(output.contains("Meeting ROI"));
        assert!(output.contains("13.5h"));
        assert!(output.contains("13/100"));
    }

    #[test]
    fn sacrifice_for_startup() {
        let app = sample_app(FocusMode::Startup);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_sacrifice_overlay(frame, &app, area);
        });
        assert!(output.contains("Startup Mode lost 2.0h"));
        assert!(output.contains("to academic"));
        assert!(output.contains("Product Dev Sprint \u{2192} Internship Sync"));
    }

    #[test]
    fn sacrifice_for_untouched_mode() {
        let app = sample_app(FocusMode::DeepWork);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_sacrifice_overlay(frame, &app, area);
        });
        assert!(output.contains("Career Mode lost 0.0h"));
        assert!(output.contains("Nothing displaced"));
        assert!(output.contains("startup"));
    }
}
