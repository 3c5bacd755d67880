use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use super::handle_key;
use crate::model::{FocusMode, IntentLabel, SliderPosition};
use crate::ops::compose::ComposeStage;
use crate::store::Modal;
use crate::tui::app::App;
use crate::tui::render::test_helpers::*;

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    app.refresh(Instant::now(), noon());
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn number_keys_switch_mode() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.dashboard.mode(), FocusMode::Academic);
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.dashboard.mode(), FocusMode::Zen);
    assert!(!app.ticker.is_running());
    press(&mut app, KeyCode::Char('3'));
    assert!(app.ticker.is_running());
}

#[test]
fn slider_keys() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Char('C'));
    assert_eq!(app.dashboard.slider(), SliderPosition::Calendar);
    press(&mut app, KeyCode::Char('J'));
    assert_eq!(app.dashboard.slider(), SliderPosition::Junk);
    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.dashboard.slider(), SliderPosition::Home);
}

#[test]
fn shifted_lowercase_is_normalized() {
    let mut app = sample_app(FocusMode::Startup);
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('r'), KeyModifiers::SHIFT));
    assert_eq!(app.dashboard.slider(), SliderPosition::Reports);
}

#[test]
fn resolve_focused_message() {
    let mut app = sample_app(FocusMode::Startup);
    let first = app.focused_message_id().unwrap();
    assert_eq!(first, "e1");
    press(&mut app, KeyCode::Char('x'));
    assert!(app.dashboard.messages().iter().all(|m| m.id != "e1"));
    assert!(app.toast_visible(Instant::now()));
    assert_eq!(app.focused_message_id().as_deref(), Some("e3"));
}

#[test]
fn pin_focused_message() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Char('p'));
    let e1 = app.dashboard.messages().iter().find(|m| m.id == "e1").unwrap();
    assert!(e1.pinned);
}

#[test]
fn lane_navigation_wraps() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.lane, 1);
    assert_eq!(app.focused_message_id().as_deref(), Some("e5"));
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.lane, 2);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.row, 2);
    for _ in 0..20 {
        press(&mut app, KeyCode::Char('j'));
    }
    let later = app.lanes()[2].entries.len();
    assert_eq!(app.row, later - 1);
}

#[test]
fn drag_right_past_threshold_resolves() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Char('L'));
    press(&mut app, KeyCode::Char('L'));
    // 80: not far enough
    press(&mut app, KeyCode::Char(' '));
    assert!(app.dashboard.messages().iter().any(|m| m.id == "e1"));

    press(&mut app, KeyCode::Char('L'));
    press(&mut app, KeyCode::Char('L'));
    press(&mut app, KeyCode::Char('L'));
    assert_eq!(app.drag.as_ref().map(|d| d.offset), Some(120));
    press(&mut app, KeyCode::Char(' '));
    assert!(app.drag.is_none());
    assert!(app.dashboard.messages().iter().all(|m| m.id != "e1"));
}

#[test]
fn drag_left_is_a_noop() {
    let mut app = sample_app(FocusMode::Startup);
    let before = app.dashboard.messages().len();
    for _ in 0..4 {
        press(&mut app, KeyCode::Char('H'));
    }
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.dashboard.messages().len(), before);
}

#[test]
fn enter_opens_detail_and_esc_closes() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dashboard.modal(), &Modal::Message("e1".into()));
    press(&mut app, KeyCode::Char('p'));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.dashboard.modal(), &Modal::None);
    assert!(app.dashboard.messages()[0].pinned);
}

#[test]
fn compose_wizard_end_to_end() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.dashboard.modal(), &Modal::Compose);

    // Empty fields: stays on the first step
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.compose.as_ref().map(|c| c.wizard.stage),
        Some(ComposeStage::Compose)
    );
    assert_eq!(
        app.dashboard.notices().latest().map(|n| n.title.as_str()),
        Some("Please fill in all fields")
    );

    type_str(&mut app, "sarah@vc.com");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "Deck");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "Attached");
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.compose.as_ref().map(|c| c.wizard.stage),
        Some(ComposeStage::Intent)
    );

    // No intent chosen yet
    press(&mut app, KeyCode::Enter);
    assert!(app.compose.is_some());

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(
        app.compose.as_ref().and_then(|c| c.wizard.intent),
        Some(IntentLabel::Action)
    );
    press(&mut app, KeyCode::Enter);
    assert!(app.compose.is_none());
    assert_eq!(app.dashboard.modal(), &Modal::None);
    assert_eq!(
        app.dashboard.notices().latest().map(|n| n.title.as_str()),
        Some("Message sent")
    );
}

#[test]
fn first_intent_arrow_selects_fyi() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Char('n'));
    type_str(&mut app, "a");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "b");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "c");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.compose.as_ref().and_then(|c| c.wizard.intent), None);

    press(&mut app, KeyCode::Down);
    let compose = app.compose.as_ref().unwrap();
    assert_eq!(compose.wizard.intent, Some(IntentLabel::Fyi));
    assert_eq!(compose.intent_cursor, 0);
    assert!(compose.wizard.quiet);

    press(&mut app, KeyCode::Down);
    assert_eq!(
        app.compose.as_ref().and_then(|c| c.wizard.intent),
        Some(IntentLabel::Social)
    );
}

#[test]
fn compose_esc_on_intent_goes_back() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Char('n'));
    type_str(&mut app, "a");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "b");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "c");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    let compose = app.compose.as_ref().unwrap();
    assert_eq!(compose.wizard.stage, ComposeStage::Compose);
    assert_eq!(compose.wizard.subject, "b");
    press(&mut app, KeyCode::Esc);
    assert!(app.compose.is_none());
}

#[test]
fn calendar_enter_on_event_stitches_context() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Char('C'));
    // Friday 14:00 is the investor pitch, linked to e19
    app.cal_day = 5;
    app.cal_hour = 14;
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dashboard.modal(), &Modal::Message("e19".into()));
}

#[test]
fn calendar_enter_on_empty_cell_opens_agenda() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Char('C'));
    app.cal_day = 6;
    app.cal_hour = 7;
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.agenda.as_ref().map(|a| a.form.time.as_str()), Some("07:00"));
    type_str(&mut app, "Pitch review");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "Priya");
    press(&mut app, KeyCode::Enter);
    assert!(app.agenda.is_none());
    assert_eq!(
        app.dashboard.notices().latest().and_then(|n| n.description.as_deref()),
        Some("Pitch review with Priya at 07:00")
    );
}

#[test]
fn collab_enter_toggles_contact_filter() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dashboard.selected_contact(), Some("c1"));
    assert!(app.dashboard.visible_messages().iter().all(|m| m.from.id == "c1"));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dashboard.selected_contact(), None);
}

#[test]
fn thread_map_for_focused_project() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.dashboard.modal(), &Modal::ThreadMap("p1".into()));
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char(']'));
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.dashboard.modal(), &Modal::None);
    assert_eq!(
        app.dashboard.notices().latest().map(|n| n.title.as_str()),
        Some("No thread map for this project.")
    );
}

#[test]
fn roi_links_to_sacrifice() {
    let mut app = sample_app(FocusMode::Startup);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.dashboard.modal(), &Modal::Roi);
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.dashboard.modal(), &Modal::Sacrifice);
}

#[test]
fn help_toggles_and_q_quits() {
    let mut app = empty_app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.show_help);
    assert!(!app.should_quit);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn keys_on_empty_dataset_do_not_panic() {
    let mut app = empty_app();
    for code in [
        KeyCode::Enter,
        KeyCode::Char('x'),
        KeyCode::Char('p'),
        KeyCode::Char('L'),
        KeyCode::Char('t'),
        KeyCode::Tab,
        KeyCode::Down,
    ] {
        press(&mut app, code);
    }
    assert!(app.drag.is_none());
}
