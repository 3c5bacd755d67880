use serde::{Deserialize, Serialize};

/// How close a sender is. Drives avatar-strip membership and visual weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relationship {
    InnerCircle,
    Important,
    #[default]
    Regular,
    Noise,
}

impl Relationship {
    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::InnerCircle => "inner-circle",
            Relationship::Important => "important",
            Relationship::Regular => "regular",
            Relationship::Noise => "noise",
        }
    }
}

/// A person (or bot) that sends messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    /// Avatar reference (URL or empty)
    #[serde(default)]
    pub avatar: String,
    pub email: String,
    #[serde(default)]
    pub relationship: Relationship,
    #[serde(default)]
    pub contexts: Vec<String>,
}

impl Contact {
    /// First whitespace-separated word of the name, used on the avatar strip
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Single-character stand-in for an avatar
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}
