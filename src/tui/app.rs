use std::io;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, Message, SliderPosition};
use crate::ops::agenda::AgendaForm;
use crate::ops::burndown::Burndown;
use crate::ops::compose::ComposeWizard;
use crate::ops::filter::{FIRST_HOUR, LAST_HOUR};
use crate::ops::grouping::Lane;
use crate::store::{Dashboard, Modal};

use super::input;
use super::render;
use super::theme::Theme;

/// How long a notice stays on the toast line
pub const TOAST_DURATION: Duration = Duration::from_secs(4);
/// Offset applied per H/L press while dragging a card
pub const DRAG_STEP: i32 = 40;

/// Fires once a minute while running. Stopped while the burndown is hidden.
#[derive(Debug, Clone)]
pub struct MinuteTicker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl MinuteTicker {
    pub fn new(interval: Duration) -> Self {
        MinuteTicker {
            interval,
            next_due: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            tracing::debug!("burndown ticker started");
            self.next_due = Some(now + self.interval);
        }
    }

    pub fn stop(&mut self) {
        if self.next_due.take().is_some() {
            tracing::debug!("burndown ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// True once per elapsed interval; reschedules itself
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

/// Which text field of the composer has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    To,
    Subject,
    Body,
}

/// Composer UI state layered over the wizard
#[derive(Debug, Clone, Default)]
pub struct ComposeState {
    pub wizard: ComposeWizard,
    pub field: ComposeField,
    /// Highlighted intent on the second step (index into IntentLabel::ALL)
    pub intent_cursor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgendaField {
    #[default]
    Agenda,
    Person,
    Time,
}

#[derive(Debug, Clone, Default)]
pub struct AgendaState {
    pub form: AgendaForm,
    pub field: AgendaField,
}

/// A card being dragged sideways
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drag {
    pub message_id: String,
    pub offset: i32,
}

/// Main application state
pub struct App {
    pub dashboard: Dashboard,
    pub config: Config,
    pub theme: Theme,
    pub should_quit: bool,
    pub show_help: bool,
    /// Collapse bundles in the band lanes
    pub smart_grouping: bool,
    /// Focused band lane (0 = NOW)
    pub lane: usize,
    /// Row within the focused lane
    pub row: usize,
    /// Cursor for list views (collab, junk, reports)
    pub list_cursor: usize,
    /// Focused project bubble
    pub project_cursor: usize,
    /// Calendar cell cursor: weekday 0 = Sunday
    pub cal_day: u32,
    pub cal_hour: u32,
    pub compose: Option<ComposeState>,
    pub agenda: Option<AgendaState>,
    pub drag: Option<Drag>,
    pub ticker: MinuteTicker,
    /// Wall clock as of the last tick
    pub now: NaiveDateTime,
    pub burndown: Burndown,
    /// Notices already surfaced on the toast line
    pub seen_notices: usize,
    pub toast_since: Option<Instant>,
}

impl App {
    pub fn new(dashboard: Dashboard, config: Config, now: NaiveDateTime) -> Self {
        let theme = Theme::from_config(dashboard.mode(), &config.ui);
        let burndown = dashboard.burndown(now);
        let seen_notices = dashboard.notices().count();
        let mut app = App {
            dashboard,
            config,
            theme,
            should_quit: false,
            show_help: false,
            smart_grouping: false,
            lane: 0,
            row: 0,
            list_cursor: 0,
            project_cursor: 0,
            cal_day: 1,
            cal_hour: 9,
            compose: None,
            agenda: None,
            drag: None,
            ticker: MinuteTicker::new(Duration::from_secs(60)),
            now,
            burndown,
            seen_notices,
            toast_since: None,
        };
        app.sync_ticker(Instant::now());
        app
    }

    /// Re-derive everything that depends on state or the clock. Called after
    /// every handled key and on each tick, with the current wall clock.
    pub fn refresh(&mut self, now: Instant, wall: NaiveDateTime) {
        self.now = wall;
        self.theme = Theme::from_config(self.dashboard.mode(), &self.config.ui);
        self.burndown = self.dashboard.burndown(self.now);
        self.clamp_cursors();
        self.sync_ticker(now);

        let count = self.dashboard.notices().count();
        if count > self.seen_notices {
            self.seen_notices = count;
            self.toast_since = Some(now);
        }
        if self.compose.is_some() && *self.dashboard.modal() != Modal::Compose {
            self.compose = None;
        }
    }

    /// The ticker runs only while the burndown is on screen
    fn sync_ticker(&mut self, now: Instant) {
        if self.dashboard.is_zen() {
            self.ticker.stop();
        } else {
            self.ticker.start(now);
        }
    }

    /// Advance the clock when a minute has passed
    pub fn tick(&mut self, now: Instant, wall: NaiveDateTime) {
        if self.ticker.fire_if_due(now) {
            self.refresh(now, wall);
        }
    }

    pub fn lanes(&self) -> Vec<Lane<'_>> {
        self.dashboard.lanes(self.smart_grouping)
    }

    /// Message under the home cursor (the lead message for a bundle)
    pub fn focused_message(&self) -> Option<&Message> {
        let lanes = self.lanes();
        lanes
            .get(self.lane)
            .and_then(|l| l.entries.get(self.row))
            .and_then(|e| e.lead())
    }

    pub fn focused_message_id(&self) -> Option<String> {
        self.focused_message().map(|m| m.id.clone())
    }

    /// Whether the toast line should still show the latest notice
    pub fn toast_visible(&self, now: Instant) -> bool {
        self.toast_since
            .is_some_and(|t| now.duration_since(t) < TOAST_DURATION)
    }

    pub fn cal_cell_events(&self) -> Vec<String> {
        let today = self.now.date();
        let slots = self.dashboard.week(today);
        crate::ops::filter::events_at(&slots, self.cal_day, self.cal_hour)
            .into_iter()
            .map(|e| e.id.clone())
            .collect()
    }

    pub fn list_len(&self) -> usize {
        match self.dashboard.slider() {
            SliderPosition::Collab => self.dashboard.data().contacts.len(),
            SliderPosition::Junk => self.dashboard.junk().len(),
            SliderPosition::Reports => self.dashboard.unread().len(),
            SliderPosition::Home | SliderPosition::Calendar => 0,
        }
    }

    fn clamp_cursors(&mut self) {
        let lane_lens: Vec<usize> = self.lanes().iter().map(|l| l.entries.len()).collect();
        self.lane = self.lane.min(lane_lens.len().saturating_sub(1));
        let len = lane_lens.get(self.lane).copied().unwrap_or(0);
        self.row = self.row.min(len.saturating_sub(1));

        self.list_cursor = self.list_cursor.min(self.list_len().saturating_sub(1));
        let projects = self.dashboard.visible_projects().len();
        self.project_cursor = self.project_cursor.min(projects.saturating_sub(1));
        self.cal_day = self.cal_day.min(6);
        self.cal_hour = self.cal_hour.clamp(FIRST_HOUR, LAST_HOUR);

        if let Some(drag) = &self.drag
            && !self.dashboard.messages().iter().any(|m| m.id == drag.message_id)
        {
            self.drag = None;
        }
    }
}

fn wall_clock() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Run the TUI application
pub fn run(dashboard: Dashboard, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(dashboard, config, wall_clock());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!(mode = %app.dashboard.mode(), "dashboard opened");

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            app.refresh(Instant::now(), wall_clock());
        }

        app.tick(Instant::now(), wall_clock());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_fires_once_per_interval() {
        let start = Instant::now();
        let mut t = MinuteTicker::new(Duration::from_secs(60));
        assert!(!t.fire_if_due(start + Duration::from_secs(120)));
        t.start(start);
        assert!(!t.fire_if_due(start + Duration::from_secs(59)));
        assert!(t.fire_if_due(start + Duration::from_secs(60)));
        assert!(!t.fire_if_due(start + Duration::from_secs(61)));
    }

    #[test]
    fn test_burndown_uses_fresh_clock_after_zen() {
        use crate::model::FocusMode;
        use crate::tui::render::test_helpers::{noon, sample_app};

        let start = Instant::now();
        let mut app = sample_app(FocusMode::Startup);
        assert_eq!(app.burndown.time_minutes, 360);

        app.dashboard.set_mode(FocusMode::Zen);
        app.refresh(start, noon());
        assert!(!app.ticker.is_running());

        // Two hours pass with the ticker stopped
        let later = noon() + chrono::Duration::hours(2);
        app.tick(start + Duration::from_secs(7200), later);
        assert_eq!(app.burndown.time_minutes, 360);

        app.dashboard.set_mode(FocusMode::Startup);
        app.refresh(start + Duration::from_secs(7200), later);
        assert_eq!(app.burndown.time_minutes, 240);
    }

    #[test]
    fn test_resolve_between_ticks_reads_current_clock() {
        use crate::model::FocusMode;
        use crate::tui::render::test_helpers::{noon, sample_app};

        let mut app = sample_app(FocusMode::Startup);
        app.dashboard.resolve("e1");
        app.refresh(Instant::now(), noon() + chrono::Duration::minutes(30));
        assert_eq!(app.burndown.time_minutes, 330);
    }

    #[test]
    fn test_ticker_stop_and_restart() {
        let start = Instant::now();
        let mut t = MinuteTicker::new(Duration::from_secs(60));
        t.start(start);
        t.stop();
        assert!(!t.is_running());
        assert!(!t.fire_if_due(start + Duration::from_secs(600)));
        t.start(start);
        assert!(t.is_running());
    }
}
