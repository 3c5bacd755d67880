use chrono::NaiveDateTime;
use serde::Serialize;

use crate::model::{CalendarEvent, Message};

/// Unread messages listed under the report figures
pub const UNREAD_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    pub completed: usize,
    pub pending: usize,
    pub total: usize,
}

/// Completed counts read messages and events already over; pending counts
/// unread messages and events not yet started. Events in progress are in
/// neither.
pub fn report_stats(messages: &[Message], events: &[CalendarEvent], now: NaiveDateTime) -> ReportStats {
    let read = messages.iter().filter(|m| m.read).count();
    let ended = events.iter().filter(|e| e.end < now).count();
    let upcoming = events.iter().filter(|e| e.start > now).count();
    ReportStats {
        completed: read + ended,
        pending: (messages.len() - read) + upcoming,
        total: messages.len() + events.len(),
    }
}

pub fn unread_messages(messages: &[Message]) -> Vec<&Message> {
    messages.iter().filter(|m| !m.read).take(UNREAD_LIMIT).collect()
}
