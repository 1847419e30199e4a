//! Snapshot CLI command
//!
//! Loads a daily balance file, builds the category snapshot for the visible
//! categories and prints or exports it.

use chrono::NaiveDate;
use clap::Args;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::{Settings, SnapshotPaths};
use crate::error::{SnapshotError, SnapshotResult};
use crate::export::{export_snapshot, ExportFormat};
use crate::models::DailyBalances;
use crate::reports::CategorySnapshotReport;
use crate::storage::file_io::read_json_required;

/// Arguments for `snapshot show`
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Daily balance file (JSON: date -> account -> balance)
    #[arg(short, long)]
    pub balances: Option<PathBuf>,

    /// Show balances as of this date (YYYY-MM-DD); defaults to the latest day
    #[arg(short, long)]
    pub date: Option<String>,

    /// Export to a file instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format; guessed from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,
}

/// Handle `snapshot show`
pub fn handle_show_command(
    paths: &SnapshotPaths,
    settings: &Settings,
    args: ShowArgs,
) -> SnapshotResult<()> {
    let balances_path = args.balances.unwrap_or_else(|| paths.balances_file());
    let balances: DailyBalances = read_json_required(&balances_path)?;

    let date = args.date.as_deref().map(parse_date).transpose()?;
    let report = CategorySnapshotReport::from_balances(&balances, date, settings)?;

    if !report.unclassified.is_empty() {
        tracing::warn!(
            count = report.unclassified.len(),
            "some accounts match no category prefix and are left out"
        );
    }

    match args.output {
        Some(output) => {
            let format = match args.format {
                Some(format) => format,
                None => output
                    .extension()
                    .and_then(|e| e.to_str())
                    .and_then(ExportFormat::from_extension)
                    .ok_or_else(|| {
                        SnapshotError::Validation(format!(
                            "Cannot tell the export format of '{}'; pass --format csv|json|yaml",
                            output.display()
                        ))
                    })?,
            };

            let file = File::create(&output).map_err(|e| {
                SnapshotError::Export(format!("Failed to create {}: {}", output.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_snapshot(&report, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| SnapshotError::Export(e.to_string()))?;

            println!("Snapshot exported to: {}", output.display());
        }
        None => match args.format {
            Some(format) => export_snapshot(&report, format, &mut std::io::stdout().lock())?,
            None => print!("{}", report.format_terminal()),
        },
    }

    Ok(())
}

/// Parse a date argument in YYYY-MM-DD format
pub fn parse_date(s: &str) -> SnapshotResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        SnapshotError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}
