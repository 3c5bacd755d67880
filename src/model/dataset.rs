use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::{CalendarEvent, GhostEvent};
use super::contact::Contact;
use super::message::Message;
use super::project::Project;
use super::thread_map::ThreadMap;

/// Self-reported meeting outcomes used by the ROI score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiInputs {
    #[serde(default = "default_action_items")]
    pub action_items_closed: u32,
    #[serde(default = "default_decisions")]
    pub decisions_made: u32,
}

impl Default for RoiInputs {
    fn default() -> Self {
        RoiInputs {
            action_items_closed: default_action_items(),
            decisions_made: default_decisions(),
        }
    }
}

fn default_action_items() -> u32 {
    12
}

fn default_decisions() -> u32 {
    5
}

/// Everything loaded at startup. Only `messages` is ever mutated, and only
/// through the dashboard store.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub contacts: Vec<Contact>,
    pub messages: Vec<Message>,
    pub projects: Vec<Project>,
    pub events: Vec<CalendarEvent>,
    pub ghost_events: Vec<GhostEvent>,
    pub thread_maps: Vec<ThreadMap>,
    pub roi: RoiInputs,
    /// Day the calendar week is built around; today when absent
    pub anchor_date: Option<NaiveDate>,
}

impl Dataset {
    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn thread_map(&self, project_id: &str) -> Option<&ThreadMap> {
        self.thread_maps.iter().find(|m| m.project_id == project_id)
    }
}
