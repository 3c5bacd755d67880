use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::model::{CalendarEvent, FocusMode, Message, Priority, Project};

/// Earliest hour shown on the calendar grid
pub const FIRST_HOUR: u32 = 6;
/// Latest hour shown on the calendar grid
pub const LAST_HOUR: u32 = 19;
/// Number of messages the junk view lists
pub const JUNK_LIMIT: usize = 3;

/// Messages visible in `mode`, optionally narrowed to one sender.
///
/// Zen shows nothing. Startup and academic match on context; deep-work
/// matches on high priority and ignores context. Input order is kept.
pub fn filter_messages<'a>(
    messages: &'a [Message],
    mode: FocusMode,
    contact: Option<&str>,
) -> Vec<&'a Message> {
    messages
        .iter()
        .filter(|m| match mode {
            FocusMode::Zen => false,
            FocusMode::DeepWork => m.priority == Priority::High,
            FocusMode::Startup | FocusMode::Academic => m.has_context(mode.as_str()),
        })
        .filter(|m| contact.is_none_or(|id| m.from.id == id))
        .collect()
}

/// Projects visible in `mode`. Deep-work shows every project.
pub fn filter_projects(projects: &[Project], mode: FocusMode) -> Vec<&Project> {
    projects
        .iter()
        .filter(|p| match mode {
            FocusMode::Zen => false,
            FocusMode::DeepWork => true,
            FocusMode::Startup | FocusMode::Academic => p.context == mode.as_str(),
        })
        .collect()
}

/// The first few low-priority messages, regardless of mode
pub fn junk_messages(messages: &[Message]) -> Vec<&Message> {
    messages
        .iter()
        .filter(|m| m.priority == Priority::Low)
        .take(JUNK_LIMIT)
        .collect()
}

/// Sunday starting the week that contains `day`
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_sunday()))
}

/// An event placed on the week grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSlot<'a> {
    /// 0 = Sunday
    pub weekday: u32,
    pub hour: u32,
    pub event: &'a CalendarEvent,
}

/// Events for `mode` that start inside the Sun-Sat week containing `anchor`
/// and within the visible hours, in start order.
pub fn week_events(events: &[CalendarEvent], mode: FocusMode, anchor: NaiveDate) -> Vec<WeekSlot<'_>> {
    let start = week_start(anchor);
    let end = start + Duration::days(7);
    let mut slots: Vec<WeekSlot<'_>> = events
        .iter()
        .filter(|e| e.context == mode.as_str())
        .filter(|e| {
            let d = e.start.date();
            d >= start && d < end
        })
        .filter(|e| (FIRST_HOUR..=LAST_HOUR).contains(&e.start.hour()))
        .map(|e| WeekSlot {
            weekday: e.start.weekday().num_days_from_sunday(),
            hour: e.start.hour(),
            event: e,
        })
        .collect();
    slots.sort_by_key(|s| s.event.start);
    slots
}

/// Events in a single grid cell
pub fn events_at<'a>(slots: &[WeekSlot<'a>], weekday: u32, hour: u32) -> Vec<&'a CalendarEvent> {
    slots
        .iter()
        .filter(|s| s.weekday == weekday && s.hour == hour)
        .map(|s| s.event)
        .collect()
}

/// Earliest deadline at or after `now` among `messages`
pub fn next_deadline<'a>(messages: &'a [Message], now: NaiveDateTime) -> Option<&'a Message> {
    messages
        .iter()
        .filter(|m| m.deadline.is_some_and(|d| d >= now))
        .min_by_key(|m| m.deadline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Band;
    use crate::ops::fixtures::{at, contact, event, msg, project};
    use pretty_assertions::assert_eq;

    fn ids(list: &[&Message]) -> Vec<String> {
        list.iter().map(|m| m.id.clone()).collect()
    }

    fn sample() -> Vec<Message> {
        vec![
            msg("e1", Band::Now, Priority::High, 9, &["startup"]),
            msg("e2", Band::Next, Priority::Medium, 3, &["academic"]),
            msg("e3", Band::Later, Priority::High, 2, &["academic"]),
            msg("e4", Band::Now, Priority::Medium, 4, &["startup", "deep-work"]),
            msg("e5", Band::Later, Priority::Low, 1, &["startup"]),
        ]
    }

    #[test]
    fn test_startup_matches_context() {
        let messages = sample();
        let visible = filter_messages(&messages, FocusMode::Startup, None);
        assert_eq!(ids(&visible), vec!["e1", "e4", "e5"]);
        assert!(visible.iter().all(|m| m.has_context("startup")));
    }

    #[test]
    fn test_deep_work_uses_priority_only() {
        let messages = sample();
        let visible = filter_messages(&messages, FocusMode::DeepWork, None);
        // e4 carries a deep-work context but is medium priority
        assert_eq!(ids(&visible), vec!["e1", "e3"]);
    }

    #[test]
    fn test_zen_is_empty() {
        let messages = sample();
        assert!(filter_messages(&messages, FocusMode::Zen, None).is_empty());
        assert!(filter_messages(&messages, FocusMode::Zen, Some("c1")).is_empty());
    }

    #[test]
    fn test_contact_narrows() {
        let mut messages = sample();
        messages[3].from = contact("c2");
        let visible = filter_messages(&messages, FocusMode::Startup, Some("c2"));
        assert_eq!(ids(&visible), vec!["e4"]);
        assert!(filter_messages(&messages, FocusMode::Startup, Some("zz")).is_empty());
    }

    #[test]
    fn test_filter_is_deterministic() {
        let messages = sample();
        let a = filter_messages(&messages, FocusMode::Academic, None);
        let b = filter_messages(&messages, FocusMode::Academic, None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_rules() {
        let projects = vec![project("p1", "startup"), project("p2", "academic")];
        assert_eq!(filter_projects(&projects, FocusMode::Startup).len(), 1);
        assert_eq!(filter_projects(&projects, FocusMode::DeepWork).len(), 2);
        assert!(filter_projects(&projects, FocusMode::Zen).is_empty());
    }

    #[test]
    fn test_junk_takes_first_three_low() {
        let mut messages = sample();
        for i in 0..4 {
            messages.push(msg(&format!("j{}", i), Band::Later, Priority::Low, 1, &[]));
        }
        let junk = junk_messages(&messages);
        assert_eq!(ids(&junk), vec!["e5", "j0", "j1"]);
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2026-01-31 is a Saturday
        let sat = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(week_start(sat), NaiveDate::from_ymd_opt(2026, 1, 25).unwrap());
        let sun = NaiveDate::from_ymd_opt(2026, 1, 25).unwrap();
        assert_eq!(week_start(sun), sun);
    }

    #[test]
    fn test_week_events_bucket_by_day_and_hour() {
        let events = vec![
            event("a", "startup", at(27, 14, 0), at(27, 15, 0)),
            event("b", "startup", at(26, 9, 0), at(26, 10, 0)),
            event("c", "academic", at(26, 9, 0), at(26, 10, 0)),
            event("d", "startup", at(26, 21, 0), at(26, 22, 0)),
            event("e", "startup", at(20, 9, 0), at(20, 10, 0)),
        ];
        let anchor = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let slots = week_events(&events, FocusMode::Startup, anchor);
        let got: Vec<(&str, u32, u32)> = slots
            .iter()
            .map(|s| (s.event.id.as_str(), s.weekday, s.hour))
            .collect();
        assert_eq!(got, vec![("b", 1, 9), ("a", 2, 14)]);
        assert_eq!(events_at(&slots, 1, 9).len(), 1);
        assert!(events_at(&slots, 1, 10).is_empty());
    }

    #[test]
    fn test_next_deadline_skips_past() {
        let mut messages = sample();
        messages[0].deadline = Some(at(30, 12, 0));
        messages[1].deadline = Some(at(31, 17, 0));
        messages[2].deadline = Some(at(31, 12, 0));
        let next = next_deadline(&messages, at(31, 10, 0)).unwrap();
        assert_eq!(next.id, "e3");
        assert!(next_deadline(&messages, at(31, 18, 0)).is_none());
    }
}
