//! Configuration module for ledger-snapshot
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings and partial updates
//! - The settings persistence seam used by the visibility toggle

pub mod paths;
pub mod settings;
pub mod store;

pub use paths::SnapshotPaths;
pub use settings::{Settings, SettingsUpdate};
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsUpdater};
