use chrono::NaiveDateTime;
use serde::Serialize;

use crate::model::{
    Band, CalendarEvent, Contact, FocusMode, GhostEvent, Message, Priority, Project, ThreadNode,
};
use crate::ops::burndown::{Burndown, format_duration};
use crate::ops::grouping::{Lane, LaneEntry};
use crate::ops::reports::ReportStats;
use crate::ops::sacrifice::{ContextLoss, MeetingRoi, SacrificeReport};
use crate::parse::{Segment, highlight_segments};
use crate::store::Notice;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

/// Message summary: sender flattened to id and name
#[derive(Serialize)]
pub struct MessageJson {
    pub id: String,
    pub from_id: String,
    pub from: String,
    pub subject: String,
    pub preview: String,
    pub band: Band,
    pub priority: Priority,
    pub weight: u8,
    pub read: bool,
    pub pinned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDateTime>,
    pub contexts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Full message, body included
#[derive(Serialize)]
pub struct MessageDetailJson {
    #[serde(flatten)]
    pub summary: MessageJson,
    pub email: String,
    pub timestamp: NaiveDateTime,
    pub body: String,
    pub highlights: Vec<String>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LaneEntryJson {
    Message(MessageJson),
    Bundle {
        bundle_id: String,
        label: String,
        messages: Vec<MessageJson>,
    },
}

#[derive(Serialize)]
pub struct LaneJson {
    pub band: Band,
    pub count: usize,
    pub entries: Vec<LaneEntryJson>,
}

#[derive(Serialize)]
pub struct BurndownJson {
    pub at: NaiveDateTime,
    #[serde(flatten)]
    pub burndown: Burndown,
}

#[derive(Serialize)]
pub struct CalendarJson<'a> {
    pub mode: FocusMode,
    pub week_start: chrono::NaiveDate,
    pub events: Vec<&'a CalendarEvent>,
    pub ghost_events: Vec<&'a GhostEvent>,
}

#[derive(Serialize)]
pub struct ReportsJson {
    #[serde(flatten)]
    pub stats: ReportStats,
    pub unread: Vec<MessageJson>,
}

#[derive(Serialize)]
pub struct ThreadJson<'a> {
    pub project_id: String,
    pub project: Option<String>,
    pub path: Vec<&'a ThreadNode>,
}

#[derive(Serialize)]
pub struct ContactJson<'a> {
    #[serde(flatten)]
    pub contact: &'a Contact,
    pub messages: usize,
}

#[derive(Serialize)]
pub struct ModeJson {
    pub id: FocusMode,
    pub name: &'static str,
    pub description: &'static str,
    pub vibe: &'static str,
    pub accent: &'static str,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn message_to_json(m: &Message) -> MessageJson {
    MessageJson {
        id: m.id.clone(),
        from_id: m.from.id.clone(),
        from: m.from.name.clone(),
        subject: m.subject.clone(),
        preview: m.preview.clone(),
        band: m.band,
        priority: m.priority,
        weight: m.weight,
        read: m.read,
        pinned: m.pinned,
        deadline: m.deadline,
        contexts: m.contexts.clone(),
        bundle_id: m.bundle_id.clone(),
        tags: m.tags.clone(),
    }
}

pub fn message_detail_to_json(m: &Message) -> MessageDetailJson {
    let body = m.body_or_placeholder();
    let highlights = highlight_segments(&body)
        .into_iter()
        .filter_map(|s| match s {
            Segment::Highlight(h) => Some(h.to_string()),
            Segment::Plain(_) => None,
        })
        .collect();
    MessageDetailJson {
        summary: message_to_json(m),
        email: m.from.email.clone(),
        timestamp: m.timestamp,
        body,
        highlights,
    }
}

pub fn lane_to_json(lane: &Lane) -> LaneJson {
    LaneJson {
        band: lane.band,
        count: lane.message_count(),
        entries: lane
            .entries
            .iter()
            .map(|e| match e {
                LaneEntry::Single(m) => LaneEntryJson::Message(message_to_json(m)),
                LaneEntry::Bundle {
                    bundle_id,
                    label,
                    messages,
                } => LaneEntryJson::Bundle {
                    bundle_id: bundle_id.to_string(),
                    label: label.to_string(),
                    messages: messages.iter().map(|m| message_to_json(m)).collect(),
                },
            })
            .collect(),
    }
}

pub fn mode_to_json(mode: FocusMode) -> ModeJson {
    let cfg = mode.config();
    ModeJson {
        id: mode,
        name: cfg.name,
        description: cfg.description,
        vibe: cfg.vibe,
        accent: cfg.accent,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn short_datetime(dt: NaiveDateTime) -> String {
    dt.format("%b %-d %H:%M").to_string()
}

/// Pin, unread and attachment flags
fn marks(m: &Message) -> String {
    let mut s = String::with_capacity(3);
    s.push(if m.pinned { '*' } else { ' ' });
    s.push(if m.read { ' ' } else { '.' });
    s.push(if m.has_attachment { '+' } else { ' ' });
    s
}

/// One-line message summary
pub fn format_message_line(m: &Message) -> String {
    let due = m
        .deadline
        .map(|d| format!("  (due {})", short_datetime(d)))
        .unwrap_or_default();
    format!(
        "{:<5} {} {:<6} {:<20} {}{}",
        m.id,
        marks(m),
        m.priority.as_str(),
        m.from.name,
        m.subject,
        due
    )
}

/// Band heading with its message count
pub fn format_lane_header(lane: &Lane) -> String {
    format!("== {} ({}) ==", lane.band.label(), lane.message_count())
}

pub fn format_lane(lane: &Lane) -> Vec<String> {
    let mut lines = vec![format_lane_header(lane)];
    for entry in &lane.entries {
        match entry {
            LaneEntry::Single(m) => lines.push(format_message_line(m)),
            LaneEntry::Bundle {
                label, messages, ..
            } => {
                lines.push(format!("[{}] {} messages", label, messages.len()));
                for m in messages {
                    lines.push(format!("  {}", format_message_line(m)));
                }
            }
        }
    }
    lines
}

/// Body with `[[...]]` runs shown as `«...»`
pub fn mark_highlights(text: &str) -> String {
    highlight_segments(text)
        .iter()
        .map(|s| match s {
            Segment::Plain(p) => p.to_string(),
            Segment::Highlight(h) => format!("\u{00AB}{}\u{00BB}", h),
        })
        .collect()
}

pub fn format_message_detail(m: &Message) -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", m.id, m.subject),
        format!("from: {} <{}>", m.from.name, m.from.email),
        format!("sent: {}", short_datetime(m.timestamp)),
        format!(
            "band: {}  priority: {}  weight: {}",
            m.band.as_str(),
            m.priority.as_str(),
            m.weight
        ),
    ];
    if let Some(d) = m.deadline {
        lines.push(format!("due: {}", short_datetime(d)));
    }
    if !m.contexts.is_empty() {
        lines.push(format!("contexts: {}", m.contexts.join(", ")));
    }
    if !m.tags.is_empty() {
        lines.push(format!("tags: {}", m.tags.join(", ")));
    }
    lines.push(String::new());
    for line in mark_highlights(&m.body_or_placeholder()).lines() {
        lines.push(line.to_string());
    }
    lines
}

pub fn format_project_line(p: &Project) -> String {
    let due = p
        .next_deadline
        .map(|d| format!("  next: {}", short_datetime(d)))
        .unwrap_or_default();
    format!("{:<4} {:<20} {:>3} msgs{}", p.id, p.name, p.message_count, due)
}

pub fn format_burndown(b: &Burndown) -> String {
    format!(
        "Work left {} \u{00B7} Time left {} \u{00B7} {}",
        format_duration(b.work_minutes),
        format_duration(b.time_minutes),
        b.status.label()
    )
}

pub fn format_event_line(e: &CalendarEvent) -> String {
    let shadow = match (&e.shadowed_context, &e.original_title) {
        (Some(ctx), Some(orig)) => format!("  (displaced {}: {})", ctx, orig),
        (Some(ctx), None) => format!("  (displaced {})", ctx),
        _ => String::new(),
    };
    format!(
        "{} {}-{}  {:<28} {}{}",
        e.start.format("%a %b %-d"),
        e.start.format("%H:%M"),
        e.end.format("%H:%M"),
        e.title,
        e.kind.as_str(),
        shadow
    )
}

pub fn format_ghost_line(g: &GhostEvent) -> String {
    let when = g
        .suggested_date
        .map(short_datetime)
        .unwrap_or_else(|| "unscheduled".to_string());
    format!("~ {} ({})  {}  [from {}]", g.title, when, g.snippet, g.message_id)
}

pub fn format_notice(n: &Notice) -> String {
    n.text()
}

pub fn format_sacrifice_report(report: &SacrificeReport, events: &[&CalendarEvent]) -> Vec<String> {
    let mut lines = vec![format!(
        "{} lost {:.1}h",
        report.mode.config().name,
        report.total_hours
    )];
    for c in &report.culprits {
        lines.push(format!("  to {:<12} {:.1}h", c.context, c.hours));
    }
    for e in events {
        let orig = e.original_title.as_deref().unwrap_or("(untitled)");
        lines.push(format!("  {} -> {}", orig, e.title));
    }
    lines
}

pub fn format_sacrifice_totals(totals: &[ContextLoss]) -> Vec<String> {
    if totals.is_empty() {
        return vec!["No context lost time.".to_string()];
    }
    totals
        .iter()
        .map(|t| format!("{:<10} {:.1}h", t.context.as_str(), t.hours))
        .collect()
}

pub fn format_roi(roi: &MeetingRoi) -> Vec<String> {
    vec![
        format!("meeting hours:  {:.1}", roi.meeting_hours),
        format!("action items:   {}", roi.action_items_closed),
        format!("decisions:      {}", roi.decisions_made),
        format!("score:          {}/100", roi.score),
    ]
}

pub fn format_report_stats(stats: &ReportStats) -> Vec<String> {
    vec![
        format!("completed: {}", stats.completed),
        format!("pending:   {}", stats.pending),
        format!("total:     {}", stats.total),
    ]
}

pub fn format_thread_node(node: &ThreadNode) -> String {
    format!(
        "{:<4} {:<8} {:<10} {:<28} {}",
        node.id,
        node.kind.as_str(),
        node.status.as_str(),
        node.title,
        node.date.format("%b %-d")
    )
}

pub fn format_contact_line(c: &Contact, messages: usize) -> String {
    format!(
        "{:<15} {:<22} {:<13} {} msgs",
        c.id,
        c.name,
        c.relationship.as_str(),
        messages
    )
}

pub fn format_mode_line(mode: FocusMode) -> String {
    let cfg = mode.config();
    format!("{:<10} {:<14} {}", mode.as_str(), cfg.name, cfg.description)
}
