use chrono::NaiveDateTime;
use serde::Serialize;

/// A project bubble shown beside the avatar strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Owning context (matched against focus-mode names)
    pub context: String,
    /// `#RRGGBB`
    pub color: String,
    pub message_count: u32,
    pub next_deadline: Option<NaiveDateTime>,
    /// Contact IDs, in display order
    pub related_contacts: Vec<String>,
}
