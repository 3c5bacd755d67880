use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::mode::FocusMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Meeting,
    DeepWork,
    Focus,
    Deadline,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Meeting => "meeting",
            EventKind::DeepWork => "deep-work",
            EventKind::Focus => "focus",
            EventKind::Deadline => "deadline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    High,
    Medium,
    Low,
}

/// A scheduled block on the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: EventKind,
    /// Context the event belongs to
    pub context: String,
    /// Message this event was created from, if any
    pub message_id: Option<String>,
    /// Thread this event relates to, if any
    pub thread_id: Option<String>,
    /// Contact IDs
    pub participants: Vec<String>,
    pub is_shadow: bool,
    /// The context this event displaced
    pub shadowed_context: Option<FocusMode>,
    /// Title of the displaced block
    pub original_title: Option<String>,
    pub energy: Option<EnergyLevel>,
}

impl CalendarEvent {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether clicking this event should try to open a message
    pub fn links_message(&self) -> bool {
        self.message_id.is_some() || self.thread_id.is_some()
    }
}

/// A suggested, not-yet-committed event derived from message content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GhostEvent {
    pub id: String,
    pub message_id: String,
    pub title: String,
    pub suggested_date: Option<NaiveDateTime>,
    pub snippet: String,
    pub solidified: bool,
}
