//! Snapshot export
//!
//! Writes a [`CategorySnapshotReport`] as:
//! - CSV: one row per top-level account plus a total row per category
//! - JSON: the full report, machine-readable
//! - YAML: the full report, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use clap::ValueEnum;

use crate::error::SnapshotResult;
use crate::reports::CategorySnapshotReport;

pub use self::csv::export_snapshot_csv;
pub use json::export_snapshot_json;
pub use yaml::export_snapshot_yaml;

/// Output format for `snapshot show --output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Write `report` to `writer` in `format`
pub fn export_snapshot<W: Write>(
    report: &CategorySnapshotReport,
    format: ExportFormat,
    writer: &mut W,
) -> SnapshotResult<()> {
    match format {
        ExportFormat::Csv => export_snapshot_csv(report, writer),
        ExportFormat::Json => export_snapshot_json(report, writer),
        ExportFormat::Yaml => export_snapshot_yaml(report, writer),
    }
}
