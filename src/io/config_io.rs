use std::fs;
use std::path::{Path, PathBuf};

use crate::io::data_io::DataError;
use crate::model::config::Config;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "FOCUSMAIL_CONFIG";

/// Resolve the config file path.
///
/// Order: explicit `--config`, `$FOCUSMAIL_CONFIG`,
/// `$XDG_CONFIG_HOME/focusmail/config.toml`, `~/.config/focusmail/config.toml`.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    config_path_with(explicit, |key| std::env::var(key).ok())
}

/// Like [`config_path`] but with an injectable environment lookup
pub fn config_path_with(explicit: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = env(CONFIG_ENV).filter(|s| !s.is_empty()) {
        return PathBuf::from(path);
    }
    let config_dir = env("XDG_CONFIG_HOME")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| home_from(&env).join(".config"));
    config_dir.join("focusmail").join("config.toml")
}

/// Home directory from the given environment, `/` when unset
pub(crate) fn home_from(env: &impl Fn(&str) -> Option<String>) -> PathBuf {
    env("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("/"))
}

/// Read the config file at `path`.
///
/// A missing file yields the defaults. A file that exists but cannot be
/// parsed is an error; an explicitly named file that is missing is too.
pub fn read_config_from(path: &Path, required: bool) -> Result<Config, DataError> {
    if !path.exists() {
        if required {
            return Err(DataError::ReadError {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            });
        }
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let text = fs::read_to_string(path).map_err(|e| DataError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: Config = toml::from_str(&text).map_err(|e| DataError::ConfigParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Resolve and read the config in one step
pub fn read_config(explicit: Option<&Path>) -> Result<Config, DataError> {
    let path = config_path(explicit);
    let required = explicit.is_some();
    read_config_from(&path, required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusMode;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn explicit_path_wins() {
        let env = env_of(&[(CONFIG_ENV, "/etc/fm.toml"), ("HOME", "/home/a")]);
        let path = config_path_with(Some(Path::new("/tmp/x.toml")), env);
        assert_eq!(path, PathBuf::from("/tmp/x.toml"));
    }

    #[test]
    fn env_var_before_xdg() {
        let env = env_of(&[(CONFIG_ENV, "/etc/fm.toml"), ("XDG_CONFIG_HOME", "/xdg")]);
        assert_eq!(config_path_with(None, env), PathBuf::from("/etc/fm.toml"));
    }

    #[test]
    fn xdg_then_home() {
        let env = env_of(&[("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/a")]);
        assert_eq!(
            config_path_with(None, env),
            PathBuf::from("/xdg/focusmail/config.toml")
        );
        let env = env_of(&[("HOME", "/home/a")]);
        assert_eq!(
            config_path_with(None, env),
            PathBuf::from("/home/a/.config/focusmail/config.toml")
        );
    }

    #[test]
    fn missing_optional_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = read_config_from(&tmp.path().join("config.toml"), false).unwrap();
        assert_eq!(config.general.default_mode, FocusMode::Startup);
    }

    #[test]
    fn missing_required_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = read_config_from(&tmp.path().join("nope.toml"), true).unwrap_err();
        assert!(matches!(err, DataError::ReadError { .. }));
    }

    #[test]
    fn reads_file_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[general]\ndefault_mode = \"zen\"\n").unwrap();
        let config = read_config_from(&path, true).unwrap();
        assert_eq!(config.general.default_mode, FocusMode::Zen);
    }

    #[test]
    fn malformed_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[general\n").unwrap();
        let err = read_config_from(&path, false).unwrap_err();
        assert!(err.to_string().contains("could not parse"));
    }
}
