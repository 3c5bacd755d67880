use chrono::{NaiveDate, NaiveDateTime};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::data_io::SAMPLE_DATA;
use crate::model::{BurndownConfig, Config, Dataset, FocusMode};
use crate::parse::parse_dataset;
use crate::store::Dashboard;
use crate::tui::app::App;

pub const TERM_W: u16 = 100;
pub const TERM_H: u16 = 30;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Saturday 2026-01-31 at noon, the sample data's anchor day
pub fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 31)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn sample_data() -> Dataset {
    parse_dataset(SAMPLE_DATA).unwrap().0
}

/// App over the built-in sample, opened in `mode` at noon
pub fn sample_app(mode: FocusMode) -> App {
    let dashboard = Dashboard::new(sample_data(), BurndownConfig::default(), mode);
    App::new(dashboard, Config::default(), noon())
}

/// App over an empty dataset
pub fn empty_app() -> App {
    let dashboard = Dashboard::new(Dataset::default(), BurndownConfig::default(), FocusMode::Startup);
    App::new(dashboard, Config::default(), noon())
}
