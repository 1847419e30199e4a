//! CSV export of the category snapshot

use std::io::Write;

use crate::error::{SnapshotError, SnapshotResult};
use crate::reports::CategorySnapshotReport;

/// Write `Category,Account,Balance` rows, followed by a total row per category
///
/// Account rows are the card's display rows: non-zero, largest first.
pub fn export_snapshot_csv<W: Write>(
    report: &CategorySnapshotReport,
    writer: &mut W,
) -> SnapshotResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record(["Category", "Account", "Balance"])
        .map_err(|e| SnapshotError::Export(e.to_string()))?;

    for card in &report.cards {
        let category = card.category.to_string();
        for account in card.rows() {
            let balance = format!("{:.2}", account.balance);
            csv.write_record([category.as_str(), account.name.as_str(), balance.as_str()])
                .map_err(|e| SnapshotError::Export(e.to_string()))?;
        }
        let total = format!("{:.2}", card.total);
        csv.write_record([category.as_str(), "TOTAL", total.as_str()])
            .map_err(|e| SnapshotError::Export(e.to_string()))?;
    }

    csv.flush()
        .map_err(|e| SnapshotError::Export(e.to_string()))?;
    Ok(())
}
