use crossterm::event::{KeyCode, KeyEvent};

use crate::model::{FocusMode, SliderPosition};
use crate::tui::app::{AgendaState, App, ComposeState, DRAG_STEP, Drag};

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // A card mid-drag only answers to drag keys
    if app.drag.is_some() {
        handle_drag(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Focus modes
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as usize) - ('1' as usize);
            app.dashboard.set_mode(FocusMode::ALL[idx]);
            app.row = 0;
        }

        // Slider
        KeyCode::Char('h') => set_slider(app, SliderPosition::Home),
        KeyCode::Char('c') => set_slider(app, SliderPosition::Collab),
        KeyCode::Char('J') => set_slider(app, SliderPosition::Junk),
        KeyCode::Char('C') => set_slider(app, SliderPosition::Calendar),
        KeyCode::Char('R') => set_slider(app, SliderPosition::Reports),

        // Overlays
        KeyCode::Char('n') => {
            app.dashboard.open_compose();
            app.compose = Some(ComposeState::default());
        }
        KeyCode::Char('a') => app.dashboard.open_roi(),
        KeyCode::Char('s') => app.dashboard.open_sacrifice(),
        KeyCode::Char('t') => {
            let project = app
                .dashboard
                .visible_projects()
                .get(app.project_cursor)
                .map(|p| p.id.clone());
            if let Some(id) = project {
                app.dashboard.open_project(&id);
            }
        }
        KeyCode::Char('[') => app.project_cursor = app.project_cursor.saturating_sub(1),
        KeyCode::Char(']') => app.project_cursor += 1,
        KeyCode::Char('g') => app.smart_grouping = !app.smart_grouping,

        _ => match app.dashboard.slider() {
            SliderPosition::Home => handle_home(app, key),
            SliderPosition::Calendar => handle_calendar(app, key),
            SliderPosition::Collab => handle_collab(app, key),
            SliderPosition::Junk | SliderPosition::Reports => handle_list(app, key),
        },
    }
}

fn set_slider(app: &mut App, slider: SliderPosition) {
    app.dashboard.set_slider(slider);
    app.list_cursor = 0;
}

fn handle_home(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.row += 1,
        KeyCode::Char('k') | KeyCode::Up => app.row = app.row.saturating_sub(1),
        KeyCode::Tab | KeyCode::Right => {
            app.lane = (app.lane + 1) % 3;
            app.row = 0;
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.lane = (app.lane + 2) % 3;
            app.row = 0;
        }
        KeyCode::Enter => {
            if let Some(id) = app.focused_message_id() {
                app.dashboard.open_message(&id);
            }
        }
        KeyCode::Char('p') => {
            if let Some(id) = app.focused_message_id() {
                app.dashboard.pin(&id);
            }
        }
        KeyCode::Char('x') => {
            if let Some(id) = app.focused_message_id() {
                app.dashboard.resolve(&id);
            }
        }
        KeyCode::Char('H') | KeyCode::Char('L') => {
            if let Some(id) = app.focused_message_id() {
                let step = if key.code == KeyCode::Char('L') { DRAG_STEP } else { -DRAG_STEP };
                app.drag = Some(Drag {
                    message_id: id,
                    offset: step,
                });
            }
        }
        KeyCode::Esc => app.dashboard.select_contact(None),
        _ => {}
    }
}

fn handle_drag(app: &mut App, key: KeyEvent) {
    let Some(drag) = app.drag.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char('L') | KeyCode::Right => drag.offset += DRAG_STEP,
        KeyCode::Char('H') | KeyCode::Left => drag.offset -= DRAG_STEP,
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(drag) = app.drag.take() {
                app.dashboard.release_drag(&drag.message_id, drag.offset);
            }
        }
        KeyCode::Esc => app.drag = None,
        _ => {}
    }
}

fn handle_calendar(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.cal_day = app.cal_day.saturating_sub(1),
        KeyCode::Right => app.cal_day += 1,
        KeyCode::Up | KeyCode::Char('k') => app.cal_hour = app.cal_hour.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => app.cal_hour += 1,
        KeyCode::Enter => {
            let events = app.cal_cell_events();
            if let Some(id) = events.first() {
                app.dashboard.click_event(id);
            } else {
                app.agenda = Some(AgendaState {
                    form: crate::ops::agenda::AgendaForm::for_hour(app.cal_hour),
                    ..Default::default()
                });
            }
        }
        _ => {}
    }
}

fn handle_collab(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let contacts = app.dashboard.contacts_by_closeness();
            let Some(id) = contacts.get(app.list_cursor).map(|c| c.id.clone()) else {
                return;
            };
            if app.dashboard.selected_contact() == Some(id.as_str()) {
                app.dashboard.select_contact(None);
            } else {
                app.dashboard.select_contact(Some(&id));
            }
        }
        KeyCode::Esc => app.dashboard.select_contact(None),
        _ => handle_list(app, key),
    }
}

fn handle_list(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.list_cursor += 1,
        KeyCode::Char('k') | KeyCode::Up => app.list_cursor = app.list_cursor.saturating_sub(1),
        KeyCode::Enter => {
            let id = match app.dashboard.slider() {
                SliderPosition::Junk => {
                    app.dashboard.junk().get(app.list_cursor).map(|m| m.id.clone())
                }
                SliderPosition::Reports => {
                    app.dashboard.unread().get(app.list_cursor).map(|m| m.id.clone())
                }
                _ => None,
            };
            if let Some(id) = id {
                app.dashboard.open_message(&id);
            }
        }
        _ => {}
    }
}
