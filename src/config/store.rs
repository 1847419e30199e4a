//! Settings persistence seam
//!
//! The snapshot core never writes settings itself. It hands a
//! [`SettingsUpdate`] to a [`SettingsUpdater`], and the host decides how the
//! merged value is stored.

use super::paths::SnapshotPaths;
use super::settings::{Settings, SettingsUpdate};
use crate::error::SnapshotResult;

/// Anything that can accept a partial settings change and persist it
pub trait SettingsUpdater {
    /// Current settings value
    fn settings(&self) -> &Settings;

    /// Merge `update` into the current settings and persist the result
    fn update_settings(&mut self, update: SettingsUpdate) -> SnapshotResult<()>;
}

/// Settings backed by `config.json` in the data directory
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    paths: SnapshotPaths,
    current: Settings,
}

impl FileSettingsStore {
    /// Load the settings file (or defaults) for the given paths
    pub fn open(paths: SnapshotPaths) -> SnapshotResult<Self> {
        let current = Settings::load_or_create(&paths)?;
        Ok(Self { paths, current })
    }

    pub fn paths(&self) -> &SnapshotPaths {
        &self.paths
    }
}

impl SettingsUpdater for FileSettingsStore {
    fn settings(&self) -> &Settings {
        &self.current
    }

    fn update_settings(&mut self, update: SettingsUpdate) -> SnapshotResult<()> {
        if update.is_empty() {
            return Ok(());
        }

        let next = self.current.apply(update);
        next.save(&self.paths)?;
        self.current = next;
        Ok(())
    }
}

/// Settings kept in memory only
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    current: Settings,
    updates: usize,
}

impl MemorySettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            current: settings,
            updates: 0,
        }
    }

    /// Number of updates applied so far
    pub fn update_count(&self) -> usize {
        self.updates
    }
}

impl SettingsUpdater for MemorySettingsStore {
    fn settings(&self) -> &Settings {
        &self.current
    }

    fn update_settings(&mut self, update: SettingsUpdate) -> SnapshotResult<()> {
        self.current = self.current.apply(update);
        self.updates += 1;
        Ok(())
    }
}
