//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the snapshot report
//! and the settings store.

pub mod settings;
pub mod snapshot;

pub use settings::{handle_config_command, handle_toggle_command, ConfigArgs};
pub use snapshot::{handle_show_command, ShowArgs};
