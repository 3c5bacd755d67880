use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};

use crate::model::IntentLabel;
use crate::ops::compose::ComposeStage;
use crate::tui::app::{AgendaField, App, ComposeField, ComposeState};
use crate::tui::theme::Theme;

use super::helpers::{centered_rect, overlay_block};

const CURSOR: &str = "\u{258C}";

/// Label + value row; the focused field gets a bar cursor
fn field_line<'a>(theme: &Theme, label: &str, value: &str, focused: bool) -> Line<'a> {
    let bg = theme.background;
    let label_style = if focused {
        Style::default()
            .fg(theme.accent)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };
    let mut spans = vec![
        Span::styled(format!("{:<10}", label), label_style),
        Span::styled(value.to_string(), Style::default().fg(theme.text).bg(bg)),
    ];
    if focused {
        spans.push(Span::styled(CURSOR, Style::default().fg(theme.accent).bg(bg)));
    }
    Line::from(spans)
}

pub fn render_compose_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(state) = &app.compose else {
        return;
    };
    let theme = &app.theme;
    let popup = centered_rect(70, 70, area);
    frame.render_widget(Clear, popup);

    let (title, lines) = match state.wizard.stage {
        ComposeStage::Compose => ("Compose", compose_lines(theme, state)),
        ComposeStage::Intent => ("Label Intent", intent_lines(theme, state)),
    };
    let paragraph = Paragraph::new(lines)
        .block(overlay_block(theme, title))
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, popup);
}

fn compose_lines<'a>(theme: &Theme, state: &ComposeState) -> Vec<Line<'a>> {
    let w = &state.wizard;
    vec![
        field_line(theme, "To", &w.to, state.field == ComposeField::To),
        field_line(theme, "Subject", &w.subject, state.field == ComposeField::Subject),
        field_line(theme, "Body", &w.body, state.field == ComposeField::Body),
        Line::from(""),
        Line::from(Span::styled(
            "Tab next field  Enter continue  Esc discard",
            Style::default().fg(theme.dim).bg(theme.background),
        )),
    ]
}

fn intent_lines<'a>(theme: &Theme, state: &ComposeState) -> Vec<Line<'a>> {
    let bg = theme.background;
    let w = &state.wizard;
    let mut lines = vec![
        Line::from(Span::styled(
            format!("To {}: {}", w.to, w.subject),
            Style::default().fg(theme.dim).bg(bg),
        )),
        Line::from(""),
    ];

    for (i, intent) in IntentLabel::ALL.iter().enumerate() {
        let row_bg = if i == state.intent_cursor { theme.selection_bg } else { bg };
        let chosen = if w.intent == Some(*intent) { "\u{25CF}" } else { "\u{25CB}" };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {:<8}", chosen, intent.label()),
                Style::default()
                    .fg(theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                intent.description(),
                Style::default().fg(theme.dim).bg(row_bg),
            ),
        ]));
    }
    lines.push(Line::from(""));

    let delivery = if w.quiet { "quiet" } else { "loud" };
    lines.push(Line::from(vec![
        Span::styled("Delivery  ", Style::default().fg(theme.dim).bg(bg)),
        Span::styled(delivery, Style::default().fg(theme.text).bg(bg)),
    ]));

    if w.intent == Some(IntentLabel::Urgent) {
        lines.push(field_line(theme, "Why now", &w.justification, true));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "\u{2191}\u{2193} intent  Tab quiet/loud  Enter send  Esc back",
        Style::default().fg(theme.dim).bg(bg),
    )));
    lines
}

/// Quick agenda form opened on an empty calendar cell
pub fn render_agenda_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(state) = &app.agenda else {
        return;
    };
    let theme = &app.theme;
    let popup = centered_rect(50, 40, area);
    frame.render_widget(Clear, popup);

    let f = &state.form;
    let lines = vec![
        field_line(theme, "Agenda", &f.agenda, state.field == AgendaField::Agenda),
        field_line(theme, "With", &f.person, state.field == AgendaField::Person),
        field_line(theme, "At", &f.time, state.field == AgendaField::Time),
        Line::from(""),
        Line::from(Span::styled(
            "Tab next  Enter schedule  Esc cancel",
            Style::default().fg(theme.dim).bg(theme.background),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .block(overlay_block(theme, "Quick Agenda"))
        .style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, popup);
}
