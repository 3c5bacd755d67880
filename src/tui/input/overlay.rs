use crossterm::event::{KeyCode, KeyEvent};

use crate::store::Modal;
use crate::tui::app::App;

/// Keys while a detail, report or thread-map overlay is open
pub(super) fn handle_overlay(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.dashboard.close_modal(),
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }

    let Modal::Message(id) = app.dashboard.modal().clone() else {
        // The ROI overlay links through to the sacrifice report
        if *app.dashboard.modal() == Modal::Roi && key.code == KeyCode::Char('s') {
            app.dashboard.open_sacrifice();
        }
        return;
    };
    match key.code {
        KeyCode::Char('p') => app.dashboard.pin(&id),
        KeyCode::Char('x') => app.dashboard.resolve(&id),
        _ => {}
    }
}
