//! JSON export of the category snapshot

use std::io::Write;

use crate::error::{SnapshotError, SnapshotResult};
use crate::reports::CategorySnapshotReport;

/// Write the full report as pretty-printed JSON
pub fn export_snapshot_json<W: Write>(
    report: &CategorySnapshotReport,
    writer: &mut W,
) -> SnapshotResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(|e| SnapshotError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SnapshotError::Export(e.to_string()))?;
    Ok(())
}
