//! JSON files on disk
//!
//! Settings and daily balances are both stored as pretty-printed JSON.
//! Writes go through a sibling `.json.tmp` file that is renamed into place.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{SnapshotError, SnapshotResult};

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> SnapshotError {
    SnapshotError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Load `path`, or `T::default()` when there is no such file
pub fn read_json<T, P>(path: P) -> SnapshotResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match path.exists() {
        true => parse_file(path),
        false => Ok(T::default()),
    }
}

/// Load `path`, failing with "File not found" when it is absent
pub fn read_json_required<T, P>(path: P) -> SnapshotResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(SnapshotError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }
    parse_file(path)
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> SnapshotResult<T> {
    let file = File::open(path).map_err(|e| storage_error("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Replace `path` with `data` as pretty JSON
pub fn write_json_atomic<T, P>(path: P, data: &T) -> SnapshotResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create directory", dir, e))?;
    }

    // same directory, so the rename stays on one filesystem
    let staging = path.with_extension("json.tmp");
    let result = write_staged(&staging, data)
        .and_then(|()| fs::rename(&staging, path).map_err(|e| storage_error("replace", path, e)));
    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}

fn write_staged<T: Serialize>(staging: &Path, data: &T) -> SnapshotResult<()> {
    let file = File::create(staging).map_err(|e| storage_error("create", staging, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_error("serialize into", staging, e))?;
    writer.flush().map_err(|e| storage_error("flush", staging, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_error("sync", staging, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{BalanceLookup, DailyBalances};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let settings: Settings = read_json(temp_dir.path().join("config.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_balances_written_atomically() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("balances.json");
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let mut balances = DailyBalances::new();
        balances.insert(day, "Assets:Cash", 40.0);
        write_json_atomic(&path, &balances).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let loaded: DailyBalances = read_json_required(&path).unwrap();
        assert_eq!(loaded.latest_date(), Some(day));
        assert_eq!(loaded.as_of(day).balance_of("Assets:Cash"), Some(40.0));
    }

    #[test]
    fn test_required_balances_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("balances.json");

        let err = read_json_required::<DailyBalances, _>(&path).unwrap_err();
        assert!(err.to_string().contains("File not found"));

        fs::write(&path, r#"{ "2024-13-01": {} }"#).unwrap();
        let err = read_json_required::<DailyBalances, _>(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
