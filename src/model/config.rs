use std::collections::HashMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::mode::FocusMode;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub burndown: BurndownConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Mode the dashboard opens in
    #[serde(default)]
    pub default_mode: FocusMode,
    /// Dataset file to load instead of the built-in sample
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurndownConfig {
    /// Minutes of work per weight unit
    #[serde(default = "default_minutes_per_weight")]
    pub minutes_per_weight: u32,
    /// End of the working day, `HH:MM`
    #[serde(default = "default_cutoff")]
    pub cutoff: String,
    /// Slack beyond which the day counts as ahead
    #[serde(default = "default_ahead_buffer")]
    pub ahead_buffer_minutes: u32,
}

impl Default for BurndownConfig {
    fn default() -> Self {
        BurndownConfig {
            minutes_per_weight: default_minutes_per_weight(),
            cutoff: default_cutoff(),
            ahead_buffer_minutes: default_ahead_buffer(),
        }
    }
}

impl BurndownConfig {
    /// Parsed cutoff; falls back to 18:00 when the string is malformed
    pub fn cutoff_time(&self) -> NaiveTime {
        NaiveTime::parse_from_str(&self.cutoff, "%H:%M").unwrap_or_else(|_| default_cutoff_time())
    }
}

/// 18:00
pub fn default_cutoff_time() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).unwrap_or(NaiveTime::MIN)
}

fn default_minutes_per_weight() -> u32 {
    15
}

fn default_cutoff() -> String {
    "18:00".to_string()
}

fn default_ahead_buffer() -> u32 {
    120
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Overrides for base palette slots (`background`, `text`, `dim`, ...)
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Per-mode accent overrides keyed by mode name
    #[serde(default)]
    pub mode_accents: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            mode_accents: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
