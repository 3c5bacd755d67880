use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{CalendarEvent, EventKind, FocusMode, RoiInputs};

/// Hours lost by one context to shadowing events
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextLoss {
    pub context: FocusMode,
    pub hours: f64,
}

/// What took time away from one mode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SacrificeReport {
    pub mode: FocusMode,
    /// Rounded to one decimal
    pub total_hours: f64,
    /// Hours by the displacing event's own context, first-seen order
    pub culprits: Vec<Culprit>,
    pub events: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Culprit {
    pub context: String,
    pub hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeetingRoi {
    pub meeting_hours: f64,
    pub action_items_closed: u32,
    pub decisions_made: u32,
    /// 0-100
    pub score: u32,
}

fn hours(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Hours lost per shadowed context across all events, first-seen order
pub fn sacrifice_totals(events: &[CalendarEvent]) -> Vec<ContextLoss> {
    let mut totals: IndexMap<FocusMode, i64> = IndexMap::new();
    for e in events {
        if let Some(ctx) = e.shadowed_context {
            *totals.entry(ctx).or_insert(0) += e.duration().num_minutes();
        }
    }
    totals
        .into_iter()
        .map(|(context, minutes)| ContextLoss {
            context,
            hours: hours(minutes),
        })
        .collect()
}

/// Events that displaced `mode`, with a breakdown by who displaced it
pub fn sacrifice_report(events: &[CalendarEvent], mode: FocusMode) -> SacrificeReport {
    let lost: Vec<&CalendarEvent> = events
        .iter()
        .filter(|e| e.shadowed_context == Some(mode))
        .collect();
    let mut by_culprit: IndexMap<&str, i64> = IndexMap::new();
    for e in &lost {
        *by_culprit.entry(e.context.as_str()).or_insert(0) += e.duration().num_minutes();
    }
    let total: i64 = by_culprit.values().sum();
    SacrificeReport {
        mode,
        total_hours: round1(hours(total)),
        culprits: by_culprit
            .into_iter()
            .map(|(context, minutes)| Culprit {
                context: context.to_string(),
                hours: round1(hours(minutes)),
            })
            .collect(),
        events: lost.iter().map(|e| e.id.clone()).collect(),
    }
}

/// Meeting return on investment.
///
/// score = min(round((actions + decisions) / hours * 10), 100), where zero
/// meeting hours count as one.
pub fn meeting_roi(events: &[CalendarEvent], inputs: RoiInputs) -> MeetingRoi {
    let minutes: i64 = events
        .iter()
        .filter(|e| e.kind == EventKind::Meeting)
        .map(|e| e.duration().num_minutes())
        .sum();
    let meeting_hours = round1(hours(minutes));
    let divisor = if meeting_hours == 0.0 { 1.0 } else { meeting_hours };
    let outcomes = f64::from(inputs.action_items_closed + inputs.decisions_made);
    let score = ((outcomes / divisor) * 10.0).round().min(100.0) as u32;
    MeetingRoi {
        meeting_hours,
        action_items_closed: inputs.action_items_closed,
        decisions_made: inputs.decisions_made,
        score,
    }
}
