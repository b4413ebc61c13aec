//! JSON file persistence shared by the problem store and the daily goal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors reading or writing local records.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("No data directory available")]
    NoDataDir,
    #[error("I/O error on {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("No problem with id '{0}'")]
    NotFound(String),
    #[error("Id prefix '{0}' matches more than one problem")]
    Ambiguous(String),
    #[error("Daily goal must be at least 1 (got {0})")]
    InvalidGoal(u32),
}

/// Read a JSON file. Returns `Ok(None)` when the file does not exist (first run).
/// Propagates IO errors (permission, disk) and JSON parse errors.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&data)
        .map(Some)
        .map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
}

/// Write pretty JSON atomically: a sibling `.tmp` file renamed over the target.
/// Creates the parent directory if needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, serde::Deserialize)]
    struct Sample {
        n: u32,
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let out: Option<Sample> = read_json(&dir.path().join("absent.json")).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("sample.json");
        write_json(&path, &Sample { n: 3 }).unwrap();
        let out: Option<Sample> = read_json(&path).unwrap();
        assert_eq!(out, Some(Sample { n: 3 }));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        let err = read_json::<Sample>(&path).unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
    }
}
