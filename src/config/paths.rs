//! Path management for ledger-snapshot
//!
//! Provides XDG-compliant path resolution for the settings file and the
//! default location of balance snapshots.
//!
//! ## Path Resolution Order
//!
//! 1. `LEDGER_SNAPSHOT_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ledger-snapshot` or `~/.config/ledger-snapshot`
//! 3. Windows: `%APPDATA%\ledger-snapshot`

use std::path::PathBuf;

use crate::error::SnapshotError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "LEDGER_SNAPSHOT_DIR";

/// Manages all paths used by ledger-snapshot
#[derive(Debug, Clone)]
pub struct SnapshotPaths {
    base_dir: PathBuf,
}

impl SnapshotPaths {
    /// Create a new SnapshotPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory can be
    /// determined.
    pub fn new() -> Result<Self, SnapshotError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SnapshotPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/ledger-snapshot/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default balance snapshot file, used when `--balances` is not given
    pub fn balances_file(&self) -> PathBuf {
        self.base_dir.join("balances.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SnapshotError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SnapshotError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written yet
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SnapshotError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                SnapshotError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("ledger-snapshot"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SnapshotError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SnapshotError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ledger-snapshot"))
}
