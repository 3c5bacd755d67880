//! Builders shared by the ops and store unit tests

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{
    Band, CalendarEvent, Contact, EventKind, FocusMode, Message, Priority, Project, Relationship,
};

pub fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

pub fn contact(id: &str) -> Contact {
    Contact {
        id: id.into(),
        name: format!("Person {}", id.to_uppercase()),
        avatar: String::new(),
        email: format!("{}@example.com", id),
        relationship: Relationship::Regular,
        contexts: vec![],
    }
}

pub fn msg(id: &str, band: Band, priority: Priority, weight: u8, contexts: &[&str]) -> Message {
    Message {
        id: id.into(),
        from: contact("c1"),
        subject: format!("Subject {}", id),
        preview: format!("Preview {}", id),
        body: None,
        timestamp: at(31, 9, 0),
        read: false,
        pinned: false,
        band,
        priority,
        weight,
        deadline: None,
        contexts: contexts.iter().map(|s| s.to_string()).collect(),
        thread_id: None,
        bundle_id: None,
        tags: vec![],
        has_attachment: false,
        needs_reply: false,
        is_invite: false,
        intent: None,
    }
}

pub fn project(id: &str, context: &str) -> Project {
    Project {
        id: id.into(),
        name: format!("Project {}", id),
        context: context.into(),
        color: "#6366F1".into(),
        message_count: 0,
        next_deadline: None,
        related_contacts: vec![],
    }
}

pub fn event(id: &str, context: &str, start: NaiveDateTime, end: NaiveDateTime) -> CalendarEvent {
    CalendarEvent {
        id: id.into(),
        title: format!("Event {}", id),
        start,
        end,
        kind: EventKind::Meeting,
        context: context.into(),
        message_id: None,
        thread_id: None,
        participants: vec![],
        is_shadow: false,
        shadowed_context: None,
        original_title: None,
        energy: None,
    }
}

pub fn shadow(id: &str, context: &str, shadowed: FocusMode, hours: u32) -> CalendarEvent {
    let mut e = event(id, context, at(28, 10, 0), at(28, 10 + hours, 0));
    e.is_shadow = true;
    e.shadowed_context = Some(shadowed);
    e
}
