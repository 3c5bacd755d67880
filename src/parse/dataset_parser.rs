use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::model::{
    Band, CalendarEvent, Connection, Contact, Dataset, EnergyLevel, EventKind, FocusMode,
    GhostEvent, IntentLabel, Message, NodeKind, NodeStatus, Priority, Project, RoiInputs,
    ThreadMap, ThreadNode,
};

// ---------------------------------------------------------------------------
// On-disk shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    anchor_date: Option<NaiveDate>,
    #[serde(default)]
    roi: RoiInputs,
    #[serde(default)]
    contacts: Vec<Contact>,
    #[serde(default)]
    messages: Vec<RawMessage>,
    #[serde(default)]
    projects: Vec<RawProject>,
    #[serde(default)]
    events: Vec<RawEvent>,
    #[serde(default)]
    ghost_events: Vec<RawGhostEvent>,
    #[serde(default)]
    thread_maps: Vec<RawThreadMap>,
}

/// A sender is either a contact ID or a full inline contact
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SenderRef {
    Id(String),
    Inline(Contact),
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    id: String,
    from: SenderRef,
    subject: String,
    #[serde(default)]
    preview: String,
    #[serde(default)]
    body: Option<String>,
    timestamp: NaiveDateTime,
    #[serde(default)]
    read: bool,
    #[serde(default)]
    pinned: bool,
    band: Band,
    priority: Priority,
    #[serde(default = "default_weight")]
    weight: i64,
    #[serde(default)]
    deadline: Option<NaiveDateTime>,
    #[serde(default)]
    contexts: Vec<String>,
    #[serde(default)]
    thread_id: Option<String>,
    #[serde(default)]
    bundle_id: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    has_attachment: bool,
    #[serde(default)]
    needs_reply: bool,
    #[serde(default)]
    is_invite: bool,
    #[serde(default)]
    intent: Option<IntentLabel>,
}

fn default_weight() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
struct RawProject {
    id: String,
    name: String,
    context: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    message_count: u32,
    #[serde(default)]
    next_deadline: Option<NaiveDateTime>,
    #[serde(default)]
    related_contacts: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    id: String,
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    kind: EventKind,
    context: String,
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    thread_id: Option<String>,
    #[serde(default)]
    participants: Vec<String>,
    #[serde(default)]
    is_shadow: bool,
    #[serde(default)]
    shadowed_context: Option<FocusMode>,
    #[serde(default)]
    original_title: Option<String>,
    #[serde(default)]
    energy: Option<EnergyLevel>,
}

#[derive(Debug, Deserialize)]
struct RawGhostEvent {
    id: String,
    message_id: String,
    title: String,
    #[serde(default)]
    suggested_date: Option<NaiveDateTime>,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    solidified: bool,
}

#[derive(Debug, Deserialize)]
struct RawThreadMap {
    project_id: String,
    #[serde(default)]
    nodes: Vec<RawThreadNode>,
    #[serde(default)]
    connections: Vec<Connection>,
}

#[derive(Debug, Deserialize)]
struct RawThreadNode {
    id: String,
    kind: NodeKind,
    title: String,
    date: NaiveDateTime,
    status: NodeStatus,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a dataset from TOML.
///
/// Returns the dataset plus human-readable warnings for records that were
/// dropped or adjusted. Only malformed TOML (or a record missing a required
/// field) is an error.
pub fn parse_dataset(text: &str) -> Result<(Dataset, Vec<String>), toml::de::Error> {
    let raw: RawDataset = toml::from_str(text)?;
    let mut warnings = Vec::new();

    let contacts = dedup_by_id(raw.contacts, |c| &c.id, "contact", &mut warnings);

    let mut messages = Vec::new();
    let mut seen = HashSet::new();
    for m in raw.messages {
        if !seen.insert(m.id.clone()) {
            warnings.push(format!("message {}: duplicate id, dropped", m.id));
            continue;
        }
        let from = match m.from {
            SenderRef::Inline(contact) => contact,
            SenderRef::Id(id) => match contacts.iter().find(|c| c.id == id) {
                Some(c) => c.clone(),
                None => {
                    warnings.push(format!("message {}: unknown sender '{}', dropped", m.id, id));
                    continue;
                }
            },
        };
        let weight = if (1..=10).contains(&m.weight) {
            m.weight as u8
        } else {
            let clamped = m.weight.clamp(1, 10) as u8;
            warnings.push(format!(
                "message {}: weight {} out of range, clamped to {}",
                m.id, m.weight, clamped
            ));
            clamped
        };
        messages.push(Message {
            id: m.id,
            from,
            subject: m.subject,
            preview: m.preview,
            body: m.body,
            timestamp: m.timestamp,
            read: m.read,
            pinned: m.pinned,
            band: m.band,
            priority: m.priority,
            weight,
            deadline: m.deadline,
            contexts: m.contexts,
            thread_id: m.thread_id,
            bundle_id: m.bundle_id,
            tags: m.tags,
            has_attachment: m.has_attachment,
            needs_reply: m.needs_reply,
            is_invite: m.is_invite,
            intent: m.intent,
        });
    }

    let projects = dedup_by_id(raw.projects, |p| &p.id, "project", &mut warnings)
        .into_iter()
        .map(|p| Project {
            id: p.id,
            name: p.name,
            context: p.context,
            color: p.color,
            message_count: p.message_count,
            next_deadline: p.next_deadline,
            related_contacts: p.related_contacts,
        })
        .collect();

    let mut events = Vec::new();
    for e in dedup_by_id(raw.events, |e| &e.id, "event", &mut warnings) {
        if e.end < e.start {
            warnings.push(format!("event {}: ends before it starts, dropped", e.id));
            continue;
        }
        events.push(CalendarEvent {
            id: e.id,
            title: e.title,
            start: e.start,
            end: e.end,
            kind: e.kind,
            context: e.context,
            message_id: e.message_id,
            thread_id: e.thread_id,
            participants: e.participants,
            is_shadow: e.is_shadow,
            shadowed_context: e.shadowed_context,
            original_title: e.original_title,
            energy: e.energy,
        });
    }

    let ghost_events = dedup_by_id(raw.ghost_events, |g| &g.id, "ghost event", &mut warnings)
        .into_iter()
        .map(|g| GhostEvent {
            id: g.id,
            message_id: g.message_id,
            title: g.title,
            suggested_date: g.suggested_date,
            snippet: g.snippet,
            solidified: g.solidified,
        })
        .collect();

    let thread_maps = raw
        .thread_maps
        .into_iter()
        .map(|m| build_thread_map(m, &mut warnings))
        .collect();

    Ok((
        Dataset {
            contacts,
            messages,
            projects,
            events,
            ghost_events,
            thread_maps,
            roi: raw.roi,
            anchor_date: raw.anchor_date,
        },
        warnings,
    ))
}

fn build_thread_map(raw: RawThreadMap, warnings: &mut Vec<String>) -> ThreadMap {
    let nodes: Vec<ThreadNode> = raw
        .nodes
        .into_iter()
        .map(|n| ThreadNode {
            id: n.id,
            kind: n.kind,
            title: n.title,
            date: n.date,
            status: n.status,
        })
        .collect();
    let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut connections = Vec::new();
    for c in raw.connections {
        if ids.contains(c.from.as_str()) && ids.contains(c.to.as_str()) {
            connections.push(c);
        } else {
            warnings.push(format!(
                "thread map {}: connection {} -> {} references an unknown node, dropped",
                raw.project_id, c.from, c.to
            ));
        }
    }
    ThreadMap {
        project_id: raw.project_id,
        nodes,
        connections,
    }
}

/// Keep the first record for each ID, warning about the rest
fn dedup_by_id<T>(
    items: Vec<T>,
    id: impl Fn(&T) -> &String,
    what: &str,
    warnings: &mut Vec<String>,
) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(id(&item).clone()) {
            out.push(item);
        } else {
            warnings.push(format!("{} {}: duplicate id, dropped", what, id(&item)));
        }
    }
    out
}
