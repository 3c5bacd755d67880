use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Top-level presentation context. Drives both styling and message filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusMode {
    #[default]
    Startup,
    Academic,
    DeepWork,
    Zen,
}

impl FocusMode {
    pub const ALL: [FocusMode; 4] = [
        FocusMode::Startup,
        FocusMode::Academic,
        FocusMode::DeepWork,
        FocusMode::Zen,
    ];

    /// The context string this mode matches against message/project contexts
    pub fn as_str(self) -> &'static str {
        match self {
            FocusMode::Startup => "startup",
            FocusMode::Academic => "academic",
            FocusMode::DeepWork => "deep-work",
            FocusMode::Zen => "zen",
        }
    }

    /// Static styling and copy for this mode
    pub fn config(self) -> FocusModeConfig {
        match self {
            FocusMode::Startup => FocusModeConfig {
                name: "Startup Mode",
                primary_bg: "#F8FAFC",
                accent: "#6366F1",
                text: "#0F172A",
                vibe: "Professional, energetic.",
                description: "High-stakes work, investor updates, and team collaboration.",
            },
            FocusMode::Academic => FocusModeConfig {
                name: "Academic Mode",
                primary_bg: "#FDFCF7",
                accent: "#92400E",
                text: "#1C1917",
                vibe: "Calm, grounding, studious.",
                description: "Research, thesis work, and scholarly communication.",
            },
            FocusMode::DeepWork => FocusModeConfig {
                name: "Career Mode",
                primary_bg: "#0F172A",
                accent: "#38BDF8",
                text: "#F8FAFC",
                vibe: "High contrast, hyper-focus.",
                description: "Distraction-free environment for intensive focus.",
            },
            FocusMode::Zen => FocusModeConfig {
                name: "Zen Mode",
                primary_bg: "#1E1E1E",
                accent: "#FDE047",
                text: "#FAFAF9",
                vibe: "Low eye strain, warm.",
                description: "Evening wind-down with minimal distractions.",
            },
        }
    }

    /// Light backgrounds need dark text in the lanes
    pub fn is_light(self) -> bool {
        matches!(self, FocusMode::Startup | FocusMode::Academic)
    }
}

impl fmt::Display for FocusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FocusMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "startup" => Ok(FocusMode::Startup),
            "academic" => Ok(FocusMode::Academic),
            "deep-work" | "career" => Ok(FocusMode::DeepWork),
            "zen" => Ok(FocusMode::Zen),
            _ => Err(format!(
                "unknown mode '{}' (expected: startup, academic, deep-work, zen)",
                s
            )),
        }
    }
}

/// Per-mode theme colors and copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusModeConfig {
    pub name: &'static str,
    pub primary_bg: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub vibe: &'static str,
    pub description: &'static str,
}

/// Which secondary view is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SliderPosition {
    #[default]
    Home,
    Collab,
    Junk,
    Calendar,
    Reports,
}

impl SliderPosition {
    pub const ALL: [SliderPosition; 5] = [
        SliderPosition::Home,
        SliderPosition::Collab,
        SliderPosition::Junk,
        SliderPosition::Calendar,
        SliderPosition::Reports,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SliderPosition::Home => "Home",
            SliderPosition::Collab => "Collab",
            SliderPosition::Junk => "Junk",
            SliderPosition::Calendar => "Full Timeline",
            SliderPosition::Reports => "Reports",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_round_trip() {
        for mode in FocusMode::ALL {
            assert_eq!(mode.as_str().parse::<FocusMode>(), Ok(mode));
        }
        assert_eq!("career".parse::<FocusMode>(), Ok(FocusMode::DeepWork));
        assert!("focus".parse::<FocusMode>().is_err());
    }

    #[test]
    fn deep_work_is_labelled_career() {
        assert_eq!(FocusMode::DeepWork.config().name, "Career Mode");
        assert_eq!(FocusMode::Zen.config().accent, "#FDE047");
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&FocusMode::DeepWork).unwrap();
        assert_eq!(json, "\"deep-work\"");
        let pos: SliderPosition = serde_json::from_str("\"calendar\"").unwrap();
        assert_eq!(pos, SliderPosition::Calendar);
    }

    #[test]
    fn light_modes() {
        assert!(FocusMode::Startup.is_light());
        assert!(FocusMode::Academic.is_light());
        assert!(!FocusMode::DeepWork.is_light());
        assert!(!FocusMode::Zen.is_light());
    }
}
