use ratatui::style::Color;

use crate::model::{Band, FocusMode, NodeStatus, Priority, Relationship, UiConfig};
use crate::ops::burndown::BurndownStatus;
use crate::store::NoticeLevel;

/// Parsed color theme for the TUI. Rebuilt whenever the focus mode changes.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub accent: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
    pub selection_bg: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::for_mode(FocusMode::default())
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn hex_or(hex: &str, fallback: Color) -> Color {
    parse_hex_color(hex).unwrap_or(fallback)
}

impl Theme {
    /// Built-in palette for a mode
    pub fn for_mode(mode: FocusMode) -> Self {
        let cfg = mode.config();
        let background = hex_or(cfg.primary_bg, Color::Reset);
        let text = hex_or(cfg.text, Color::Reset);
        let accent = hex_or(cfg.accent, Color::Magenta);
        if mode.is_light() {
            Theme {
                background,
                text,
                text_bright: Color::Rgb(0x02, 0x06, 0x17),
                accent,
                dim: Color::Rgb(0x64, 0x74, 0x8B),
                red: Color::Rgb(0xDC, 0x26, 0x26),
                yellow: Color::Rgb(0xB4, 0x53, 0x09),
                green: Color::Rgb(0x05, 0x96, 0x69),
                blue: Color::Rgb(0x25, 0x63, 0xEB),
                selection_bg: Color::Rgb(0xE2, 0xE8, 0xF0),
                highlight_bg: Color::Rgb(0xFE, 0xF0, 0x8A),
                highlight_fg: Color::Rgb(0x0F, 0x17, 0x2A),
            }
        } else {
            Theme {
                background,
                text,
                text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
                accent,
                dim: Color::Rgb(0x94, 0xA3, 0xB8),
                red: Color::Rgb(0xF8, 0x71, 0x71),
                yellow: Color::Rgb(0xFB, 0xBF, 0x24),
                green: Color::Rgb(0x34, 0xD3, 0x99),
                blue: Color::Rgb(0x60, 0xA5, 0xFA),
                selection_bg: Color::Rgb(0x33, 0x41, 0x55),
                highlight_bg: Color::Rgb(0xFD, 0xE0, 0x47),
                highlight_fg: Color::Rgb(0x0F, 0x17, 0x2A),
            }
        }
    }

    /// Mode palette with `[ui.mode_accents]` and `[ui.colors]` overrides applied
    pub fn from_config(mode: FocusMode, ui: &UiConfig) -> Self {
        let mut theme = Theme::for_mode(mode);

        if let Some(color) = ui.mode_accents.get(mode.as_str()).and_then(|v| parse_hex_color(v)) {
            theme.accent = color;
        }

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "accent" => theme.accent = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "blue" => theme.blue = color,
                    "selection_bg" => theme.selection_bg = color,
                    "highlight_bg" => theme.highlight_bg = color,
                    "highlight_fg" => theme.highlight_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    pub fn band_color(&self, band: Band) -> Color {
        match band {
            Band::Now => self.red,
            Band::Next => self.yellow,
            Band::Later => self.dim,
        }
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.red,
            Priority::Medium => self.yellow,
            Priority::Low => self.dim,
        }
    }

    pub fn relationship_color(&self, relationship: Relationship) -> Color {
        match relationship {
            Relationship::InnerCircle => self.accent,
            Relationship::Important => self.text_bright,
            Relationship::Regular => self.text,
            Relationship::Noise => self.dim,
        }
    }

    pub fn burndown_color(&self, status: BurndownStatus) -> Color {
        match status {
            BurndownStatus::Behind => self.red,
            BurndownStatus::OnTrack => self.yellow,
            BurndownStatus::Ahead => self.green,
        }
    }

    pub fn notice_color(&self, level: NoticeLevel) -> Color {
        match level {
            NoticeLevel::Success => self.green,
            NoticeLevel::Info => self.blue,
            NoticeLevel::Error => self.red,
            NoticeLevel::Plain => self.text,
        }
    }

    pub fn node_color(&self, status: NodeStatus) -> Color {
        match status {
            NodeStatus::Completed => self.green,
            NodeStatus::Pending => self.yellow,
            NodeStatus::Upcoming => self.dim,
        }
    }
}
