use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directives
pub const LOG_ENV: &str = "FOCUSMAIL_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr. Used by the CLI, whose stdout carries command output.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Directory for the TUI log file, respecting XDG_STATE_HOME
pub fn state_dir() -> PathBuf {
    let env = |key: &str| std::env::var(key).ok();
    env("XDG_STATE_HOME")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            crate::io::config_io::home_from(&env)
                .join(".local")
                .join("state")
        })
        .join("focusmail")
}

/// Log to a file so output does not corrupt the alternate screen.
///
/// Returns the log path. If the file cannot be opened, logging is left
/// uninitialized and the TUI runs silently.
pub fn init_file() -> Option<PathBuf> {
    let dir = state_dir();
    let path = dir.join("focusmail.log");
    match open_log(&dir, &path) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
            Some(path)
        }
        Err(_) => None,
    }
}

fn open_log(dir: &Path, path: &Path) -> std::io::Result<fs::File> {
    fs::create_dir_all(dir)?;
    fs::OpenOptions::new().create(true).append(true).open(path)
}
