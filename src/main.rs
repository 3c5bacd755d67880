use std::path::{Path, PathBuf};

use clap::Parser;
use focusmail::cli::commands::Cli;
use focusmail::cli::handlers;
use focusmail::io::{config_io, data_io, log};
use focusmail::model::Config;
use focusmail::store::Dashboard;

/// `--data` wins over the config's `general.data`; neither means the sample
fn data_path(cli: &Cli, config: &Config) -> Option<PathBuf> {
    cli.data
        .as_deref()
        .or(config.general.data.as_deref())
        .map(PathBuf::from)
}

fn open_dashboard(cli: &Cli) -> Result<(Dashboard, Config), Box<dyn std::error::Error>> {
    let config = config_io::read_config(cli.config.as_deref().map(Path::new))?;
    let data = data_io::load_dataset(data_path(cli, &config).as_deref())?;
    let mode = cli.mode.unwrap_or(config.general.default_mode);

    let mut dashboard = Dashboard::new(data, config.burndown.clone(), mode);
    if let Some(id) = cli.contact.as_deref() {
        if dashboard.data().contact(id).is_none() {
            return Err(format!("contact not found: {}", id).into());
        }
        dashboard.select_contact(Some(id));
    }
    Ok((dashboard, config))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.command.is_none() {
        // The alternate screen owns the terminal, so logs go to a file
        if let Some(path) = log::init_file() {
            tracing::debug!(path = %path.display(), "logging to file");
        }
    } else {
        log::init_stderr();
    }

    let (dashboard, config) = open_dashboard(&cli)?;
    match cli.command {
        None => focusmail::tui::run(dashboard, config),
        Some(command) => handlers::dispatch(command, dashboard, cli.json),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
