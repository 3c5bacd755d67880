use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::contact::Contact;

/// Coarse urgency bucket, independent of priority and weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Now,
    Next,
    Later,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Now, Band::Next, Band::Later];

    pub fn as_str(self) -> &'static str {
        match self {
            Band::Now => "now",
            Band::Next => "next",
            Band::Later => "later",
        }
    }

    /// Lane heading
    pub fn label(self) -> &'static str {
        match self {
            Band::Now => "NOW",
            Band::Next => "NEXT",
            Band::Later => "LATER",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Band::Now => "High-priority, needs attention",
            Band::Next => "Coming up soon",
            Band::Later => "Lower priority, can wait",
        }
    }

    /// Whether messages in this band count toward remaining work
    pub fn is_unfinished(self) -> bool {
        matches!(self, Band::Now | Band::Next)
    }
}

impl FromStr for Band {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "now" => Ok(Band::Now),
            "next" => Ok(Band::Next),
            "later" => Ok(Band::Later),
            _ => Err(format!("unknown band '{}' (expected: now, next, later)", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Sender-declared delivery intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentLabel {
    Fyi,
    Social,
    Action,
    Urgent,
}

impl IntentLabel {
    pub const ALL: [IntentLabel; 4] = [
        IntentLabel::Fyi,
        IntentLabel::Social,
        IntentLabel::Action,
        IntentLabel::Urgent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IntentLabel::Fyi => "fyi",
            IntentLabel::Social => "social",
            IntentLabel::Action => "action",
            IntentLabel::Urgent => "urgent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IntentLabel::Fyi => "FYI",
            IntentLabel::Social => "Social",
            IntentLabel::Action => "Action",
            IntentLabel::Urgent => "Urgent",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            IntentLabel::Fyi => "No response needed. Respects focus.",
            IntentLabel::Social => "Casual chat. Delivered during breaks.",
            IntentLabel::Action => "Requires work. Creates a Ghost Block.",
            IntentLabel::Urgent => "Breaks through Focus Mode.",
        }
    }

    /// Low-stakes intents default to quiet delivery
    pub fn prefers_quiet(self) -> bool {
        matches!(self, IntentLabel::Fyi | IntentLabel::Social)
    }
}

impl fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fyi" => Ok(IntentLabel::Fyi),
            "social" => Ok(IntentLabel::Social),
            "action" => Ok(IntentLabel::Action),
            "urgent" => Ok(IntentLabel::Urgent),
            _ => Err(format!(
                "unknown intent '{}' (expected: fyi, social, action, urgent)",
                s
            )),
        }
    }
}

/// An inbox message treated as a to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: String,
    pub from: Contact,
    pub subject: String,
    pub preview: String,
    /// Full body; may contain `[[highlight]]` spans
    pub body: Option<String>,
    pub timestamp: NaiveDateTime,
    pub read: bool,
    pub pinned: bool,
    pub band: Band,
    pub priority: Priority,
    /// Effort estimate, 1-10
    pub weight: u8,
    pub deadline: Option<NaiveDateTime>,
    pub contexts: Vec<String>,
    pub thread_id: Option<String>,
    pub bundle_id: Option<String>,
    pub tags: Vec<String>,
    pub has_attachment: bool,
    pub needs_reply: bool,
    pub is_invite: bool,
    pub intent: Option<IntentLabel>,
}

impl Message {
    pub fn has_context(&self, context: &str) -> bool {
        self.contexts.iter().any(|c| c == context)
    }

    /// Body text, falling back to the preview when no body was captured
    pub fn body_or_placeholder(&self) -> String {
        match &self.body {
            Some(body) => body.clone(),
            None => format!("{}\n\n(Placeholder body)", self.preview),
        }
    }
}
