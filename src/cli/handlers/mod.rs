use chrono::{Local, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::{CalendarEvent, FocusMode, Message};
use crate::ops::compose::ComposeWizard;
use crate::ops::filter::week_start;
use crate::store::Dashboard;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(
    command: Commands,
    dashboard: Dashboard,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    dispatch_at(command, dashboard, json, Local::now().naive_local())
}

/// Run a subcommand with an explicit clock
pub fn dispatch_at(
    command: Commands,
    mut dashboard: Dashboard,
    json: bool,
    now: NaiveDateTime,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // Read commands
        Commands::List(args) => cmd_list(&dashboard, args, json),
        Commands::Show(args) => cmd_show(&dashboard, args, json),
        Commands::Projects => cmd_projects(&dashboard, json),
        Commands::Burndown(args) => cmd_burndown(&dashboard, args, now, json),
        Commands::Calendar => cmd_calendar(&dashboard, now, json),
        Commands::Sacrifice(args) => cmd_sacrifice(&dashboard, args, json),
        Commands::Roi => cmd_roi(&dashboard, json),
        Commands::Reports => cmd_reports(&dashboard, now, json),
        Commands::Junk => cmd_junk(&dashboard, json),
        Commands::Contacts => cmd_contacts(&dashboard, json),
        Commands::Modes => cmd_modes(json),

        // Commands that go through the store's notices
        Commands::Event(args) => cmd_event(&mut dashboard, args, json),
        Commands::Thread(args) => cmd_thread(&mut dashboard, args, json),
        Commands::Send(args) => cmd_send(&mut dashboard, args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn find_message<'a>(dashboard: &'a Dashboard, id: &str) -> Result<&'a Message, String> {
    dashboard
        .messages()
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| format!("message not found: {}", id))
}

/// `HH:MM` today, or now
fn parse_at(at: Option<&str>, now: NaiveDateTime) -> Result<NaiveDateTime, String> {
    match at {
        None => Ok(now),
        Some(s) => NaiveTime::parse_from_str(s, "%H:%M")
            .map(|t| now.date().and_time(t))
            .map_err(|_| format!("invalid time '{}' (expected HH:MM)", s)),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(
    dashboard: &Dashboard,
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let lanes: Vec<_> = dashboard
        .lanes(args.group)
        .into_iter()
        .filter(|l| args.band.is_none_or(|b| b == l.band))
        .collect();

    if json {
        let out: Vec<LaneJson> = lanes.iter().map(lane_to_json).collect();
        return print_json(&out);
    }

    let mut first = true;
    for lane in &lanes {
        if !first {
            println!();
        }
        first = false;
        for line in format_lane(lane) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_show(
    dashboard: &Dashboard,
    args: ShowArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let message = find_message(dashboard, &args.id)?;
    if json {
        return print_json(&message_detail_to_json(message));
    }
    for line in format_message_detail(message) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_projects(dashboard: &Dashboard, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let projects = dashboard.visible_projects();
    if json {
        return print_json(&projects);
    }
    if projects.is_empty() {
        println!("No projects in {}.", dashboard.mode().config().name);
    }
    for p in projects {
        println!("{}", format_project_line(p));
    }
    Ok(())
}

fn cmd_burndown(
    dashboard: &Dashboard,
    args: BurndownArgs,
    now: NaiveDateTime,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let at = parse_at(args.at.as_deref(), now)?;
    let burndown = dashboard.burndown(at);
    if json {
        return print_json(&BurndownJson { at, burndown });
    }
    if dashboard.is_zen() {
        println!("Burndown paused in {}.", dashboard.mode().config().name);
    }
    println!("{}", format_burndown(&burndown));
    Ok(())
}

fn cmd_calendar(
    dashboard: &Dashboard,
    now: NaiveDateTime,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let today = now.date();
    let slots = dashboard.week(today);
    let events: Vec<&CalendarEvent> = slots.iter().map(|s| s.event).collect();
    let ghosts: Vec<_> = dashboard
        .data()
        .ghost_events
        .iter()
        .filter(|g| !g.solidified)
        .collect();
    let start = week_start(dashboard.anchor_date(today));

    if json {
        return print_json(&CalendarJson {
            mode: dashboard.mode(),
            week_start: start,
            events,
            ghost_events: ghosts,
        });
    }

    println!("== Week of {} ==", start.format("%b %-d, %Y"));
    if events.is_empty() {
        println!("No events for {}.", dashboard.mode().config().name);
    }
    for e in &events {
        println!("{}", format_event_line(e));
    }
    if !ghosts.is_empty() {
        println!();
        println!("-- Ghost blocks --");
        for g in ghosts {
            println!("{}", format_ghost_line(g));
        }
    }
    Ok(())
}

fn cmd_sacrifice(
    dashboard: &Dashboard,
    args: SacrificeArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.all {
        let totals = dashboard.sacrifice_totals();
        if json {
            return print_json(&totals);
        }
        for line in format_sacrifice_totals(&totals) {
            println!("{}", line);
        }
        return Ok(());
    }

    let report = dashboard.sacrifice_report();
    if json {
        return print_json(&report);
    }
    let events: Vec<&CalendarEvent> = report
        .events
        .iter()
        .filter_map(|id| dashboard.event(id))
        .collect();
    for line in format_sacrifice_report(&report, &events) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_roi(dashboard: &Dashboard, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let roi = dashboard.meeting_roi();
    if json {
        return print_json(&roi);
    }
    for line in format_roi(&roi) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_reports(
    dashboard: &Dashboard,
    now: NaiveDateTime,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = dashboard.report_stats(now);
    let unread = dashboard.unread();
    if json {
        return print_json(&ReportsJson {
            stats,
            unread: unread.iter().map(|m| message_to_json(m)).collect(),
        });
    }
    for line in format_report_stats(&stats) {
        println!("{}", line);
    }
    if !unread.is_empty() {
        println!();
        println!("-- Unread --");
        for m in unread {
            println!("{}", format_message_line(m));
        }
    }
    Ok(())
}

fn cmd_junk(dashboard: &Dashboard, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let junk = dashboard.junk();
    if json {
        let out: Vec<MessageJson> = junk.iter().map(|m| message_to_json(m)).collect();
        return print_json(&out);
    }
    if junk.is_empty() {
        println!("No junk.");
    }
    for m in junk {
        println!("{}", format_message_line(m));
    }
    Ok(())
}

fn cmd_contacts(dashboard: &Dashboard, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let count = |id: &str| dashboard.messages().iter().filter(|m| m.from.id == id).count();
    let contacts = dashboard.contacts_by_closeness();
    if json {
        let out: Vec<ContactJson> = contacts
            .iter()
            .map(|c| ContactJson {
                contact: c,
                messages: count(&c.id),
            })
            .collect();
        return print_json(&out);
    }
    for c in contacts {
        println!("{}", format_contact_line(c, count(&c.id)));
    }
    Ok(())
}

fn cmd_modes(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out: Vec<ModeJson> = FocusMode::ALL.iter().map(|m| mode_to_json(*m)).collect();
        return print_json(&out);
    }
    for mode in FocusMode::ALL {
        println!("{}", format_mode_line(mode));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Notice-producing commands
// ---------------------------------------------------------------------------

/// Print the newest notice, if the command produced one
fn print_latest_notice(
    dashboard: &Dashboard,
    before: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let notices = dashboard.notices().since(before);
    if json {
        return print_json(&notices.last());
    }
    if let Some(n) = notices.last() {
        println!("{}", format_notice(n));
    }
    Ok(())
}

fn cmd_event(
    dashboard: &mut Dashboard,
    args: EventArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if dashboard.event(&args.id).is_none() {
        return Err(format!("event not found: {}", args.id).into());
    }
    let before = dashboard.notices().count();
    dashboard.click_event(&args.id);
    print_latest_notice(dashboard, before, json)?;
    if !json && let Some(m) = dashboard.open_message_detail() {
        println!("{}", format_message_line(m));
    }
    Ok(())
}

fn cmd_thread(
    dashboard: &mut Dashboard,
    args: ThreadArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(project) = dashboard.data().project(&args.project).map(|p| p.name.clone()) else {
        return Err(format!("project not found: {}", args.project).into());
    };
    let before = dashboard.notices().count();
    dashboard.open_project(&args.project);

    let Some(map) = dashboard.open_thread_map() else {
        return print_latest_notice(dashboard, before, json);
    };
    let path = map.path();
    if json {
        return print_json(&ThreadJson {
            project_id: args.project.clone(),
            project: Some(project),
            path,
        });
    }
    println!("== {} ==", project);
    for node in path {
        println!("{}", format_thread_node(node));
    }
    Ok(())
}

fn cmd_send(
    dashboard: &mut Dashboard,
    args: SendArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wizard = ComposeWizard {
        to: args.to,
        subject: args.subject,
        body: args.body,
        ..Default::default()
    };
    wizard.advance()?;
    if let Some(intent) = args.intent {
        wizard.select_intent(intent);
    }
    if args.quiet {
        wizard.quiet = true;
    } else if args.loud {
        wizard.quiet = false;
    }
    wizard.justification = args.justification;

    let sent = dashboard.send(&wizard)?;
    if json {
        #[derive(Serialize)]
        struct SendJson<'a> {
            message: &'a crate::ops::compose::ComposedMessage,
            notice: Option<&'a crate::store::Notice>,
        }
        return print_json(&SendJson {
            message: &sent,
            notice: dashboard.notices().latest(),
        });
    }
    if let Some(n) = dashboard.notices().latest() {
        println!("{}", format_notice(n));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_at() {
        assert_eq!(parse_at(None, noon()).unwrap(), noon());
        let at = parse_at(Some("09:30"), noon()).unwrap();
        assert_eq!(at.format("%Y-%m-%d %H:%M").to_string(), "2026-01-31 09:30");
        assert!(parse_at(Some("9.30"), noon()).is_err());
    }
}
