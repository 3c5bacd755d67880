use crate::model::{Band, Message};

/// One row in a band lane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaneEntry<'a> {
    Single(&'a Message),
    Bundle {
        bundle_id: &'a str,
        label: &'static str,
        messages: Vec<&'a Message>,
    },
}

impl<'a> LaneEntry<'a> {
    /// Message that stands for this entry (the first bundle member)
    pub fn lead(&self) -> Option<&'a Message> {
        match self {
            LaneEntry::Single(m) => Some(*m),
            LaneEntry::Bundle { messages, .. } => messages.first().copied(),
        }
    }

    pub fn messages(&self) -> Vec<&'a Message> {
        match self {
            LaneEntry::Single(m) => vec![*m],
            LaneEntry::Bundle { messages, .. } => messages.clone(),
        }
    }
}

/// Messages of one band, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane<'a> {
    pub band: Band,
    pub entries: Vec<LaneEntry<'a>>,
}

impl Lane<'_> {
    pub fn message_count(&self) -> usize {
        self.entries.iter().map(|e| e.messages().len()).sum()
    }
}

/// Display heading for a bundle id
pub fn bundle_label(bundle_id: &str) -> &'static str {
    match bundle_id {
        "seed-round" => "Seed Round Updates",
        "thesis-research" => "Thesis Research",
        _ => "Topic Bundle",
    }
}

/// Partition messages into now/next/later lanes.
///
/// With `smart` on, lane members sharing a bundle id collapse into one entry
/// placed where the first member was. Bundles need at least two members.
pub fn group_by_band<'a>(messages: &[&'a Message], smart: bool) -> Vec<Lane<'a>> {
    Band::ALL
        .iter()
        .map(|&band| {
            let members: Vec<&'a Message> =
                messages.iter().copied().filter(|m| m.band == band).collect();
            Lane {
                band,
                entries: if smart {
                    bundle_entries(&members)
                } else {
                    members.into_iter().map(LaneEntry::Single).collect()
                },
            }
        })
        .collect()
}

fn bundle_entries<'a>(members: &[&'a Message]) -> Vec<LaneEntry<'a>> {
    let mut entries = Vec::new();
    let mut placed: Vec<&str> = Vec::new();
    for &m in members {
        let Some(bundle_id) = m.bundle_id.as_deref() else {
            entries.push(LaneEntry::Single(m));
            continue;
        };
        if placed.contains(&bundle_id) {
            continue;
        }
        let group: Vec<&'a Message> = members
            .iter()
            .copied()
            .filter(|o| o.bundle_id.as_deref() == Some(bundle_id))
            .collect();
        if group.len() < 2 {
            entries.push(LaneEntry::Single(m));
            continue;
        }
        placed.push(bundle_id);
        entries.push(LaneEntry::Bundle {
            bundle_id,
            label: bundle_label(bundle_id),
            messages: group,
        });
    }
    entries
}
