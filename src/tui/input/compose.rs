use crossterm::event::{KeyCode, KeyEvent};

use crate::model::IntentLabel;
use crate::ops::compose::ComposeStage;
use crate::tui::app::{AgendaField, App, ComposeField};
use crate::util::unicode::pop_grapheme;

pub(super) fn handle_compose(app: &mut App, key: KeyEvent) {
    let Some(state) = app.compose.as_mut() else {
        return;
    };
    match state.wizard.stage {
        ComposeStage::Compose => match key.code {
            KeyCode::Esc => {
                app.compose = None;
                app.dashboard.close_modal();
            }
            KeyCode::Tab | KeyCode::Down => {
                state.field = match state.field {
                    ComposeField::To => ComposeField::Subject,
                    ComposeField::Subject => ComposeField::Body,
                    ComposeField::Body => ComposeField::To,
                };
            }
            KeyCode::BackTab | KeyCode::Up => {
                state.field = match state.field {
                    ComposeField::To => ComposeField::Body,
                    ComposeField::Subject => ComposeField::To,
                    ComposeField::Body => ComposeField::Subject,
                };
            }
            KeyCode::Enter => {
                // The borrow on app.compose ends before the dashboard is touched
                let mut wizard = state.wizard.clone();
                let advanced = app.dashboard.advance_compose(&mut wizard);
                if let Some(state) = app.compose.as_mut() {
                    state.wizard = wizard;
                    if advanced {
                        state.intent_cursor = state
                            .wizard
                            .intent
                            .and_then(|i| IntentLabel::ALL.iter().position(|x| *x == i))
                            .unwrap_or(0);
                    }
                }
            }
            KeyCode::Backspace => pop_grapheme(compose_field(state)),
            KeyCode::Char(c) => compose_field(state).push(c),
            _ => {}
        },
        ComposeStage::Intent => match key.code {
            KeyCode::Esc => state.wizard.back(),
            // With nothing chosen yet, the first arrow picks the highlighted intent
            KeyCode::Up | KeyCode::Left => {
                if state.wizard.intent.is_some() {
                    state.intent_cursor = state.intent_cursor.saturating_sub(1);
                }
                state.wizard.select_intent(IntentLabel::ALL[state.intent_cursor]);
            }
            KeyCode::Down | KeyCode::Right => {
                if state.wizard.intent.is_some() {
                    state.intent_cursor =
                        (state.intent_cursor + 1).min(IntentLabel::ALL.len() - 1);
                }
                state.wizard.select_intent(IntentLabel::ALL[state.intent_cursor]);
            }
            KeyCode::Tab => state.wizard.toggle_quiet(),
            KeyCode::Enter => {
                let wizard = state.wizard.clone();
                if app.dashboard.send(&wizard).is_ok() {
                    app.compose = None;
                }
            }
            KeyCode::Backspace => pop_grapheme(&mut state.wizard.justification),
            KeyCode::Char(c) => state.wizard.justification.push(c),
            _ => {}
        },
    }
}

fn compose_field(state: &mut crate::tui::app::ComposeState) -> &mut String {
    match state.field {
        ComposeField::To => &mut state.wizard.to,
        ComposeField::Subject => &mut state.wizard.subject,
        ComposeField::Body => &mut state.wizard.body,
    }
}

pub(super) fn handle_agenda(app: &mut App, key: KeyEvent) {
    let Some(state) = app.agenda.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => app.agenda = None,
        KeyCode::Tab | KeyCode::Down => {
            state.field = match state.field {
                AgendaField::Agenda => AgendaField::Person,
                AgendaField::Person => AgendaField::Time,
                AgendaField::Time => AgendaField::Agenda,
            };
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.field = match state.field {
                AgendaField::Agenda => AgendaField::Time,
                AgendaField::Person => AgendaField::Agenda,
                AgendaField::Time => AgendaField::Person,
            };
        }
        KeyCode::Enter => {
            let form = state.form.clone();
            if app.dashboard.schedule_agenda(&form) {
                app.agenda = None;
            }
        }
        KeyCode::Backspace => pop_grapheme(agenda_field(state)),
        KeyCode::Char(c) => agenda_field(state).push(c),
        _ => {}
    }
}

fn agenda_field(state: &mut crate::tui::app::AgendaState) -> &mut String {
    match state.field {
        AgendaField::Agenda => &mut state.form.agenda,
        AgendaField::Person => &mut state.form.person,
        AgendaField::Time => &mut state.form.time,
    }
}
