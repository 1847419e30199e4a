//! YAML export of the category snapshot

use std::io::Write;

use crate::error::{SnapshotError, SnapshotResult};
use crate::reports::CategorySnapshotReport;

/// Write the full report as YAML, preceded by a short comment header
pub fn export_snapshot_yaml<W: Write>(
    report: &CategorySnapshotReport,
    writer: &mut W,
) -> SnapshotResult<()> {
    let as_of = report
        .date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "no recorded balances".to_string());
    writeln!(writer, "# Financial snapshot as of {}", as_of)
        .map_err(|e| SnapshotError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, report).map_err(|e| SnapshotError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountWithBalance, Category};
    use crate::reports::CategoryCard;

    #[test]
    fn test_yaml_export() {
        let report = CategorySnapshotReport {
            date: None,
            currency_symbol: "$".into(),
            cards: vec![CategoryCard::new(
                Category::Liabilities,
                vec![AccountWithBalance::new("Liabilities:Card", -20.0)],
            )],
            unclassified: vec![],
        };

        let mut out = Vec::new();
        export_snapshot_yaml(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# Financial snapshot as of no recorded balances"));
        assert!(text.contains("category: Liabilities"));
        assert!(text.contains("Liabilities:Card"));
    }
}
