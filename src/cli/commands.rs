use clap::{Args, Parser, Subcommand};

use crate::model::{Band, FocusMode, IntentLabel};

#[derive(Parser)]
#[command(name = "fm", about = concat!("focusmail v", env!("CARGO_PKG_VERSION"), " - your inbox as a focus board"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Dataset file (default: config `general.data`, then the built-in sample)
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<String>,

    /// Config file (default: $FOCUSMAIL_CONFIG, then the XDG config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<String>,

    /// Focus mode: startup, academic, deep-work (career), zen
    #[arg(short, long, global = true)]
    pub mode: Option<FocusMode>,

    /// Only messages from this contact id
    #[arg(long, global = true, value_name = "ID")]
    pub contact: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List messages visible in the current mode
    List(ListArgs),
    /// Show one message with its highlights
    Show(ShowArgs),
    /// List projects for the current mode
    Projects,
    /// Remaining work against time left today
    Burndown(BurndownArgs),
    /// This week's events for the current mode, plus ghost blocks
    Calendar,
    /// Follow a calendar event to its email
    Event(EventArgs),
    /// Time the current mode lost to other contexts
    Sacrifice(SacrificeArgs),
    /// Meeting return on investment
    Roi,
    /// Completed and pending counts, plus unread messages
    Reports,
    /// Low-priority messages
    Junk,
    /// Thread map for a project
    Thread(ThreadArgs),
    /// Contacts, inner circle first
    Contacts,
    /// Compose and send a message (validated, not delivered)
    Send(SendArgs),
    /// List focus modes
    Modes,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Only this band (now, next, later)
    #[arg(long)]
    pub band: Option<Band>,
    /// Collapse related messages into bundles
    #[arg(long)]
    pub group: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Message ID to show
    pub id: String,
}

#[derive(Args)]
pub struct BurndownArgs {
    /// Evaluate at this time today (HH:MM) instead of now
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<String>,
}

#[derive(Args)]
pub struct EventArgs {
    /// Calendar event ID
    pub id: String,
}

#[derive(Args)]
pub struct SacrificeArgs {
    /// Totals across every context instead of the current mode
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct ThreadArgs {
    /// Project ID
    pub project: String,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct SendArgs {
    /// Recipient
    #[arg(long, default_value = "")]
    pub to: String,
    /// Subject line
    #[arg(long, default_value = "")]
    pub subject: String,
    /// Message body
    #[arg(long, default_value = "")]
    pub body: String,
    /// Intent label: fyi, social, action, urgent
    #[arg(long)]
    pub intent: Option<IntentLabel>,
    /// Why this can't wait (urgent only)
    #[arg(long, default_value = "")]
    pub justification: String,
    /// Deliver quietly (default for fyi and social)
    #[arg(long, conflicts_with = "loud")]
    pub quiet: bool,
    /// Deliver with a notification
    #[arg(long)]
    pub loud: bool,
}
