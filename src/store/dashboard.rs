use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{
    BurndownConfig, CalendarEvent, Contact, Dataset, FocusMode, Message, Project, Relationship,
    SliderPosition, ThreadMap,
};
use crate::ops::agenda::AgendaForm;
use crate::ops::burndown::{self, Burndown};
use crate::ops::compose::{self, ComposeError, ComposeWizard, ComposedMessage};
use crate::ops::filter::{self, WeekSlot};
use crate::ops::gesture::{DragDecision, drag_decision};
use crate::ops::grouping::{self, Lane};
use crate::ops::lookup::{EventLookup, lookup_event};
use crate::ops::reports::{self, ReportStats};
use crate::ops::sacrifice::{self, ContextLoss, MeetingRoi, SacrificeReport};

use super::notify::{Notice, NoticeLevel, Notices};

/// Which overlay is open. At most one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    /// Detail for a message id
    Message(String),
    Compose,
    Roi,
    Sacrifice,
    /// Thread map for a project id
    ThreadMap(String),
}

/// Single owner of dashboard state. Views read through the getters and
/// change state only through the command methods.
#[derive(Debug, Clone)]
pub struct Dashboard {
    data: Dataset,
    burndown_config: BurndownConfig,
    mode: FocusMode,
    slider: SliderPosition,
    selected_contact: Option<String>,
    modal: Modal,
    zen: bool,
    notices: Notices,
}

impl Dashboard {
    pub fn new(data: Dataset, burndown_config: BurndownConfig, mode: FocusMode) -> Self {
        Dashboard {
            data,
            burndown_config,
            mode,
            slider: SliderPosition::default(),
            selected_contact: None,
            modal: Modal::None,
            zen: mode == FocusMode::Zen,
            notices: Notices::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    pub fn set_mode(&mut self, mode: FocusMode) {
        tracing::debug!(from = %self.mode, to = %mode, "mode change");
        self.mode = mode;
        self.zen = mode == FocusMode::Zen;
        self.notices
            .push(Notice::success(format!("Switched to {}", mode.config().name)));
    }

    pub fn set_slider(&mut self, slider: SliderPosition) {
        tracing::debug!(slider = slider.label(), "slider change");
        self.slider = slider;
    }

    /// Narrow the message list to one sender, or clear with `None`
    pub fn select_contact(&mut self, id: Option<&str>) {
        self.selected_contact = id.map(String::from);
    }

    /// Remove a message for good. Unknown ids are ignored.
    pub fn resolve(&mut self, id: &str) {
        let before = self.data.messages.len();
        self.data.messages.retain(|m| m.id != id);
        if self.data.messages.len() == before {
            return;
        }
        tracing::info!(id, "resolved message");
        if self.modal == Modal::Message(id.to_string()) {
            self.modal = Modal::None;
        }
        self.notices.push(Notice::success("Email resolved! Great work."));
    }

    /// Flip the pin flag in place. Unknown ids are ignored.
    pub fn pin(&mut self, id: &str) {
        if let Some(m) = self.data.messages.iter_mut().find(|m| m.id == id) {
            m.pinned = !m.pinned;
            tracing::info!(id, pinned = m.pinned, "toggled pin");
        }
    }

    /// Apply a released drag gesture to a message
    pub fn release_drag(&mut self, id: &str, offset: i32) -> DragDecision {
        let decision = drag_decision(offset);
        if decision == DragDecision::Resolve {
            self.resolve(id);
        }
        decision
    }

    pub fn open_compose(&mut self) {
        self.modal = Modal::Compose;
    }

    /// Compose stage 1 -> 2. A rejection becomes an error notice.
    pub fn advance_compose(&mut self, wizard: &mut ComposeWizard) -> bool {
        match wizard.advance() {
            Ok(()) => true,
            Err(e) => {
                self.reject(&e);
                false
            }
        }
    }

    /// Final compose step. On success the composer closes and a delivery
    /// notice is pushed; nothing is stored.
    pub fn send(&mut self, wizard: &ComposeWizard) -> Result<ComposedMessage, ComposeError> {
        let sent = wizard.send().inspect_err(|e| self.reject(e))?;
        tracing::info!(intent = %sent.intent, quiet = sent.quiet, "message sent");
        let (title, description) = compose::send_notice(&sent);
        self.notices
            .push(Notice::success(title).with_description(description));
        if self.modal == Modal::Compose {
            self.modal = Modal::None;
        }
        Ok(sent)
    }

    fn reject(&mut self, err: &impl std::fmt::Display) {
        self.notices.push(Notice::error(err.to_string()));
    }

    /// Open the message an event links to, or explain why not
    pub fn click_event(&mut self, event_id: &str) {
        let Some(event) = self.data.event(event_id) else {
            return;
        };
        let title = event.title.clone();
        match lookup_event(&self.data.messages, event) {
            EventLookup::Found(m) => {
                self.modal = Modal::Message(m.id.clone());
                self.notices.push(Notice::success(format!(
                    "Context Stitched: Opened related email for \"{}\"",
                    title
                )));
            }
            EventLookup::Missing => {
                self.notices
                    .push(Notice::info("Context not found for this event."));
            }
            EventLookup::Unlinked => {
                self.notices
                    .push(Notice::new(NoticeLevel::Plain, "Event Details").with_description(title));
            }
        }
    }

    pub fn open_message(&mut self, id: &str) {
        if self.data.messages.iter().any(|m| m.id == id) {
            self.modal = Modal::Message(id.to_string());
        }
    }

    pub fn open_project(&mut self, project_id: &str) {
        if self.data.thread_map(project_id).is_some() {
            self.modal = Modal::ThreadMap(project_id.to_string());
        } else {
            self.notices
                .push(Notice::info("No thread map for this project."));
        }
    }

    pub fn open_roi(&mut self) {
        self.modal = Modal::Roi;
    }

    pub fn open_sacrifice(&mut self) {
        self.modal = Modal::Sacrifice;
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }

    /// Confirm a quick agenda. Returns whether it was accepted.
    pub fn schedule_agenda(&mut self, form: &AgendaForm) -> bool {
        match form.submit() {
            Ok(summary) => {
                tracing::info!(%summary, "agenda scheduled");
                self.notices
                    .push(Notice::success("Agenda Scheduled").with_description(summary));
                true
            }
            Err(e) => {
                self.reject(&e);
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // Read-only state
    // -----------------------------------------------------------------------

    pub fn mode(&self) -> FocusMode {
        self.mode
    }

    pub fn slider(&self) -> SliderPosition {
        self.slider
    }

    pub fn selected_contact(&self) -> Option<&str> {
        self.selected_contact.as_deref()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn is_zen(&self) -> bool {
        self.zen
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn messages(&self) -> &[Message] {
        &self.data.messages
    }

    pub fn burndown_config(&self) -> &BurndownConfig {
        &self.burndown_config
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    pub fn visible_messages(&self) -> Vec<&Message> {
        filter::filter_messages(&self.data.messages, self.mode, self.selected_contact())
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        filter::filter_projects(&self.data.projects, self.mode)
    }

    pub fn lanes(&self, smart: bool) -> Vec<Lane<'_>> {
        grouping::group_by_band(&self.visible_messages(), smart)
    }

    pub fn burndown(&self, now: NaiveDateTime) -> Burndown {
        burndown::burndown(&self.visible_messages(), now, &self.burndown_config)
    }

    pub fn junk(&self) -> Vec<&Message> {
        filter::junk_messages(&self.data.messages)
    }

    /// Day the calendar week is built around
    pub fn anchor_date(&self, today: NaiveDate) -> NaiveDate {
        self.data.anchor_date.unwrap_or(today)
    }

    pub fn week(&self, today: NaiveDate) -> Vec<WeekSlot<'_>> {
        filter::week_events(&self.data.events, self.mode, self.anchor_date(today))
    }

    pub fn sacrifice_totals(&self) -> Vec<ContextLoss> {
        sacrifice::sacrifice_totals(&self.data.events)
    }

    pub fn sacrifice_report(&self) -> SacrificeReport {
        sacrifice::sacrifice_report(&self.data.events, self.mode)
    }

    pub fn meeting_roi(&self) -> MeetingRoi {
        sacrifice::meeting_roi(&self.data.events, self.data.roi)
    }

    pub fn report_stats(&self, now: NaiveDateTime) -> ReportStats {
        reports::report_stats(&self.data.messages, &self.data.events, now)
    }

    pub fn unread(&self) -> Vec<&Message> {
        reports::unread_messages(&self.data.messages)
    }

    pub fn next_deadline(&self, now: NaiveDateTime) -> Option<&Message> {
        filter::next_deadline(&self.data.messages, now)
    }

    /// Message shown in the detail overlay
    pub fn open_message_detail(&self) -> Option<&Message> {
        match &self.modal {
            Modal::Message(id) => self.data.messages.iter().find(|m| &m.id == id),
            _ => None,
        }
    }

    /// Thread map shown in the thread-map overlay
    pub fn open_thread_map(&self) -> Option<&ThreadMap> {
        match &self.modal {
            Modal::ThreadMap(id) => self.data.thread_map(id),
            _ => None,
        }
    }

    pub fn event(&self, id: &str) -> Option<&CalendarEvent> {
        self.data.event(id)
    }

    /// Inner-circle contacts for the avatar strip, in dataset order
    pub fn inner_circle(&self) -> Vec<&Contact> {
        self.data
            .contacts
            .iter()
            .filter(|c| c.relationship == Relationship::InnerCircle)
            .collect()
    }

    /// Contacts with the inner circle first, otherwise in dataset order
    pub fn contacts_by_closeness(&self) -> Vec<&Contact> {
        let mut contacts: Vec<&Contact> = self.data.contacts.iter().collect();
        contacts.sort_by_key(|c| match c.relationship {
            Relationship::InnerCircle => 0,
            Relationship::Important => 1,
            Relationship::Regular => 2,
            Relationship::Noise => 3,
        });
        contacts
    }
}
