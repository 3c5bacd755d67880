use crate::model::{CalendarEvent, Message};

/// Outcome of clicking a calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLookup<'a> {
    /// The event links to this message
    Found(&'a Message),
    /// The event links to a message or thread that is no longer present
    Missing,
    /// The event carries no message link
    Unlinked,
}

/// Find the first message (list order) whose id equals the event's message
/// id, or whose thread id equals the event's thread id.
pub fn lookup_event<'a>(messages: &'a [Message], event: &CalendarEvent) -> EventLookup<'a> {
    if !event.links_message() {
        return EventLookup::Unlinked;
    }
    let hit = messages.iter().find(|m| {
        event.message_id.as_deref() == Some(m.id.as_str())
            || (event.thread_id.is_some() && m.thread_id == event.thread_id)
    });
    match hit {
        Some(m) => EventLookup::Found(m),
        None => EventLookup::Missing,
    }
}
