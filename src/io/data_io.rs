use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Dataset;
use crate::parse::parse_dataset;

/// Built-in dataset used when no `--data` file is given
pub const SAMPLE_DATA: &str = include_str!("../../data/sample.toml");

/// Error type for config and dataset loading
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config {path}: {source}")]
    ConfigParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not parse dataset {origin}: {source}")]
    DatasetParseError {
        origin: String,
        source: toml::de::Error,
    },
}

/// Parse dataset text and log every validation warning
fn parse_logged(text: &str, origin: &str) -> Result<Dataset, DataError> {
    let (dataset, warnings) = parse_dataset(text).map_err(|e| DataError::DatasetParseError {
        origin: origin.to_string(),
        source: e,
    })?;
    for w in &warnings {
        tracing::warn!(origin, "{}", w);
    }
    tracing::debug!(
        origin,
        messages = dataset.messages.len(),
        events = dataset.events.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Load a dataset file
pub fn load_dataset_from(path: &Path) -> Result<Dataset, DataError> {
    let text = fs::read_to_string(path).map_err(|e| DataError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_logged(&text, &path.display().to_string())
}

/// The built-in sample dataset
pub fn sample_dataset() -> Result<Dataset, DataError> {
    parse_logged(SAMPLE_DATA, "built-in sample")
}

/// Load the dataset at `path`, or the built-in sample when `None`
pub fn load_dataset(path: Option<&Path>) -> Result<Dataset, DataError> {
    match path {
        Some(p) => load_dataset_from(p),
        None => sample_dataset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sample_parses_without_warnings() {
        let (data, warnings) = parse_dataset(SAMPLE_DATA).unwrap();
        assert!(warnings.is_empty(), "warnings: {:?}", warnings);
        assert!(!data.messages.is_empty());
        assert!(data.anchor_date.is_some());
    }

    #[test]
    fn load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.toml");
        fs::write(
            &path,
            r#"
[[contacts]]
id = "c1"
name = "Ana"
email = "ana@example.com"
"#,
        )
        .unwrap();
        let data = load_dataset(Some(&path)).unwrap();
        assert_eq!(data.contacts.len(), 1);
        assert!(data.messages.is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_dataset(Some(&tmp.path().join("none.toml"))).unwrap_err();
        assert!(err.to_string().starts_with("could not read"));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[[messages]\n").unwrap();
        let err = load_dataset(Some(&path)).unwrap_err();
        assert!(matches!(err, DataError::DatasetParseError { .. }));
    }
}
