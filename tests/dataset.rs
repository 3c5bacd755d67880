//! Properties of the bundled sample dataset, exercised through the public API.

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

use focusmail::io::data_io::{SAMPLE_DATA, sample_dataset};
use focusmail::model::{BurndownConfig, FocusMode, SliderPosition};
use focusmail::ops::burndown::BurndownStatus;
use focusmail::ops::gesture::DragDecision;
use focusmail::parse::parse_dataset;
use focusmail::store::{Dashboard, Modal};

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 31)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn dashboard(mode: FocusMode) -> Dashboard {
    Dashboard::new(sample_dataset().unwrap(), BurndownConfig::default(), mode)
}

fn visible_ids(dashboard: &Dashboard) -> Vec<String> {
    dashboard
        .visible_messages()
        .iter()
        .map(|m| m.id.clone())
        .collect()
}

#[test]
fn sample_is_clean() {
    let (data, warnings) = parse_dataset(SAMPLE_DATA).unwrap();
    assert!(warnings.is_empty(), "{:?}", warnings);
    assert_eq!(data.anchor_date, NaiveDate::from_ymd_opt(2026, 1, 31));
}

#[test]
fn startup_messages_in_list_order() {
    let d = dashboard(FocusMode::Startup);
    assert_eq!(
        visible_ids(&d),
        vec![
            "e1", "e3", "e5", "e7", "e8", "e11", "e12", "e15", "e17", "e18", "e19", "e21", "e10"
        ]
    );
}

#[test]
fn mode_sizes() {
    assert_eq!(dashboard(FocusMode::Academic).visible_messages().len(), 8);
    assert_eq!(dashboard(FocusMode::DeepWork).visible_messages().len(), 10);
}

#[test]
fn lanes_partition_visible_messages() {
    let d = dashboard(FocusMode::Startup);
    for smart in [false, true] {
        let lanes = d.lanes(smart);
        let counts: Vec<usize> = lanes.iter().map(|l| l.message_count()).collect();
        assert_eq!(counts, vec![6, 2, 5]);
    }
}

#[test]
fn burndown_at_noon_is_behind() {
    let b = dashboard(FocusMode::Startup).burndown(noon());
    assert_eq!(b.work_minutes, 915);
    assert_eq!(b.time_minutes, 360);
    assert_eq!(b.status, BurndownStatus::Behind);
}

#[test]
fn sacrifice_and_roi() {
    let d = dashboard(FocusMode::Startup);
    let totals = d.sacrifice_totals();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].context, FocusMode::Startup);
    assert_eq!(totals[0].hours, 2.0);

    let roi = d.meeting_roi();
    assert_eq!(roi.meeting_hours, 13.5);
    assert_eq!(roi.score, 13);
}

#[test]
fn reports_and_junk() {
    let d = dashboard(FocusMode::Startup);
    let stats = d.report_stats(noon());
    assert_eq!(stats.total, 53);
    let unread: Vec<&str> = d.unread().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(unread, vec!["e1", "e3", "e8", "e12", "e15"]);
    let junk: Vec<&str> = d.junk().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(junk, vec!["e7", "e18", "e21"]);
}

#[test]
fn week_has_no_saturday_startup_events() {
    let d = dashboard(FocusMode::Startup);
    let week = d.week(noon().date());
    assert_eq!(week.len(), 11);
    assert!(week.iter().all(|s| s.weekday != 6));
}

#[test]
fn clicking_linked_event_opens_its_email() {
    let mut d = dashboard(FocusMode::Startup);
    d.click_event("cal-fri-3");
    assert_eq!(*d.modal(), Modal::Message("e19".into()));
    assert_eq!(
        d.notices().latest().unwrap().text(),
        "Context Stitched: Opened related email for \"Investor Pitch\""
    );
}

#[test]
fn resolve_by_drag_removes_message() {
    let mut d = dashboard(FocusMode::Startup);
    assert_eq!(d.release_drag("e1", 150), DragDecision::Resolve);
    assert!(!visible_ids(&d).contains(&"e1".to_string()));
    assert_eq!(d.release_drag("e3", -150), DragDecision::Snooze);
    assert!(visible_ids(&d).contains(&"e3".to_string()));
}

#[test]
fn contact_filter_narrows_and_clears() {
    let mut d = dashboard(FocusMode::Startup);
    d.set_slider(SliderPosition::Collab);
    d.select_contact(Some("c1"));
    assert!(d.visible_messages().iter().all(|m| m.from.id == "c1"));
    d.select_contact(None);
    assert_eq!(d.visible_messages().len(), 13);
}

#[test]
fn thread_map_path_for_seed_round() {
    let mut d = dashboard(FocusMode::Startup);
    d.open_project("p1");
    let path: Vec<&str> = d
        .open_thread_map()
        .unwrap()
        .path()
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(path, vec!["n1", "n2", "n3", "n4", "n5"]);

    d.close_modal();
    d.open_project("p2");
    assert_eq!(*d.modal(), Modal::None);
    assert_eq!(
        d.notices().latest().unwrap().text(),
        "No thread map for this project."
    );
}
