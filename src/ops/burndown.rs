use chrono::NaiveDateTime;
use serde::Serialize;

use crate::model::{BurndownConfig, Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BurndownStatus {
    Behind,
    OnTrack,
    Ahead,
}

impl BurndownStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BurndownStatus::Behind => "behind",
            BurndownStatus::OnTrack => "ontrack",
            BurndownStatus::Ahead => "ahead",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BurndownStatus::Behind => "Behind",
            BurndownStatus::OnTrack => "On Track",
            BurndownStatus::Ahead => "Ahead",
        }
    }
}

/// Remaining work against remaining time, both in whole minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Burndown {
    pub work_minutes: i64,
    pub time_minutes: i64,
    pub status: BurndownStatus,
}

/// Effort minutes over unfinished (now/next) messages. Weight 0 counts as 1.
pub fn work_minutes(messages: &[&Message], config: &BurndownConfig) -> i64 {
    let units: i64 = messages
        .iter()
        .filter(|m| m.band.is_unfinished())
        .map(|m| i64::from(m.weight.max(1)))
        .sum();
    units * i64::from(config.minutes_per_weight)
}

/// Whole minutes from `now` to today's cutoff, never negative
pub fn time_minutes(now: NaiveDateTime, config: &BurndownConfig) -> i64 {
    let cutoff = now.date().and_time(config.cutoff_time());
    (cutoff - now).num_minutes().max(0)
}

pub fn burndown(messages: &[&Message], now: NaiveDateTime, config: &BurndownConfig) -> Burndown {
    let work = work_minutes(messages, config);
    let time = time_minutes(now, config);
    let status = if work > time {
        BurndownStatus::Behind
    } else if time - work > i64::from(config.ahead_buffer_minutes) {
        BurndownStatus::Ahead
    } else {
        BurndownStatus::OnTrack
    };
    Burndown {
        work_minutes: work,
        time_minutes: time,
        status,
    }
}

/// `"{h}h {m}m"`
pub fn format_duration(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}
