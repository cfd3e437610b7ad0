use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreFileError {
    #[error("store_file.missing")]
    Missing,
    #[error("store_file.io_error: {0}")]
    Io(#[from] io::Error),
    #[error("store_file.invalid_json: {0}")]
    Json(#[from] serde_json::Error),
}

/// What happened when the backing file was read at startup or on reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    Missing,
    Unreadable,
    Corrupt,
}

/// What happened when the collection was written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed,
}

/// Configuration for the JSON backing file
#[derive(Debug, Clone)]
pub struct StoreFileConfig {
    pub path: PathBuf,
}

impl StoreFileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Reads a whole JSON array from `path`.
pub fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreFileError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(StoreFileError::Missing),
        Err(e) => return Err(StoreFileError::Io(e)),
    };

    Ok(serde_json::from_str(&data)?)
}

/// Rewrites `path` with the whole collection as a pretty-printed JSON array.
///
/// The data goes to a temporary file in the same directory first and is then
/// renamed over the target, so readers never observe a partial file.
pub fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreFileError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp_file = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp_file, items)?;
    tmp_file.write_all(b"\n")?;
    tmp_file.flush()?;
    tmp_file.persist(path).map_err(|e| StoreFileError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: u64,
        name: String,
    }

    #[test]
    fn should_report_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_collection::<Item>(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(StoreFileError::Missing)));
    }

    #[test]
    fn should_report_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let result = read_collection::<Item>(&path);
        assert!(matches!(result, Err(StoreFileError::Json(_))));
    }

    #[test]
    fn should_write_and_read_back_collection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        let items = vec![
            Item {
                id: 1,
                name: "first".to_string(),
            },
            Item {
                id: 2,
                name: "second".to_string(),
            },
        ];

        write_collection(&path, &items).unwrap();

        let read: Vec<Item> = read_collection(&path).unwrap();
        assert_eq!(read, items);
    }

    #[test]
    fn should_overwrite_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        write_collection(
            &path,
            &[Item {
                id: 1,
                name: "old".to_string(),
            }],
        )
        .unwrap();

        write_collection::<Item>(&path, &[]).unwrap();

        let read: Vec<Item> = read_collection(&path).unwrap();
        assert!(read.is_empty());
    }

    #[test]
    fn should_fail_when_directory_does_not_exist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("items.json");

        let result = write_collection::<Item>(&path, &[]);
        assert!(matches!(result, Err(StoreFileError::Io(_))));
    }
}
