use serde::Serialize;

use crate::model::IntentLabel;

/// Minimum justification length for an urgent message
pub const MIN_JUSTIFICATION: usize = 10;

/// Validation failures. The display text doubles as the user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please select a priority label")]
    MissingIntent,
    #[error("Please provide a valid justification for urgency")]
    WeakJustification,
    #[error("Finish composing before sending")]
    NotLabeled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeStage {
    #[default]
    Compose,
    Intent,
}

/// The compiled result of a successful send
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub intent: IntentLabel,
    pub justification: Option<String>,
    pub quiet: bool,
}

/// Two-step compose wizard: write the message, then label its intent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeWizard {
    pub stage: ComposeStage,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub intent: Option<IntentLabel>,
    pub justification: String,
    pub quiet: bool,
}

impl ComposeWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// compose -> intent. Requires recipient, subject and body.
    pub fn advance(&mut self) -> Result<(), ComposeError> {
        if self.to.is_empty() || self.subject.is_empty() || self.body.is_empty() {
            return Err(ComposeError::MissingFields);
        }
        self.stage = ComposeStage::Intent;
        Ok(())
    }

    /// intent -> compose, keeping every field
    pub fn back(&mut self) {
        self.stage = ComposeStage::Compose;
    }

    /// Choosing an intent resets quiet delivery to that intent's preference
    pub fn select_intent(&mut self, intent: IntentLabel) {
        self.intent = Some(intent);
        self.quiet = intent.prefers_quiet();
    }

    pub fn toggle_quiet(&mut self) {
        self.quiet = !self.quiet;
    }

    /// Validate the intent step and compile the message. Only reachable from
    /// the intent step; the wizard is left untouched on failure.
    pub fn send(&self) -> Result<ComposedMessage, ComposeError> {
        if self.stage != ComposeStage::Intent {
            return Err(ComposeError::NotLabeled);
        }
        let intent = self.intent.ok_or(ComposeError::MissingIntent)?;
        if intent == IntentLabel::Urgent && self.justification.chars().count() < MIN_JUSTIFICATION {
            return Err(ComposeError::WeakJustification);
        }
        Ok(ComposedMessage {
            to: self.to.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
            intent,
            justification: (!self.justification.is_empty()).then(|| self.justification.clone()),
            quiet: self.quiet,
        })
    }
}

/// Notice title and description announcing a sent message
pub fn send_notice(message: &ComposedMessage) -> (String, String) {
    if message.quiet {
        (
            "Queued for quiet delivery".to_string(),
            "Will arrive during recipient's active window".to_string(),
        )
    } else {
        (
            "Message sent".to_string(),
            format!("Labeled as {}", message.intent.as_str().to_uppercase()),
        )
    }
}
