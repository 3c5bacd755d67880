mod compose;
mod navigate;
mod overlay;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use crate::store::Modal;

#[allow(unused_imports)]
use compose::*;
#[allow(unused_imports)]
use navigate::*;
#[allow(unused_imports)]
use overlay::*;

/// Handle a key event in whatever context currently has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    let key = normalize_key(key);

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.agenda.is_some() {
        handle_agenda(app, key);
        return;
    }
    if app.compose.is_some() {
        handle_compose(app, key);
        return;
    }
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }
    match app.dashboard.modal() {
        Modal::None | Modal::Compose => handle_navigate(app, key),
        _ => handle_overlay(app, key),
    }
}

/// Shift+letter arrives as lowercase with SHIFT on some terminals
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

#[cfg(test)]
mod tests;
