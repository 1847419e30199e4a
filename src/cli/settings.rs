//! Settings CLI commands
//!
//! `toggle` flips one snapshot category on or off; `config` shows the
//! current settings or changes individual fields.

use clap::Args;

use crate::config::{FileSettingsStore, SettingsUpdate, SettingsUpdater};
use crate::error::SnapshotResult;
use crate::models::Category;
use crate::services::VisibilityStore;

/// Arguments for `snapshot config`
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Currency symbol used for balances
    #[arg(long)]
    pub currency: Option<String>,

    /// Ledger file the balances come from
    #[arg(long)]
    pub ledger_file: Option<String>,

    /// Prefix of asset accounts
    #[arg(long)]
    pub asset_prefix: Option<String>,

    /// Prefix of liability accounts
    #[arg(long)]
    pub liability_prefix: Option<String>,

    /// Prefix of income accounts
    #[arg(long)]
    pub income_prefix: Option<String>,

    /// Prefix of expense accounts
    #[arg(long)]
    pub expense_prefix: Option<String>,
}

impl ConfigArgs {
    fn into_update(self) -> SettingsUpdate {
        SettingsUpdate {
            currency_symbol: self.currency,
            ledger_file: self.ledger_file,
            asset_accounts_prefix: self.asset_prefix,
            liability_accounts_prefix: self.liability_prefix,
            income_accounts_prefix: self.income_prefix,
            expense_accounts_prefix: self.expense_prefix,
            ..Default::default()
        }
    }
}

/// Handle `snapshot toggle <category>`
pub fn handle_toggle_command(store: &mut FileSettingsStore, category: &str) -> SnapshotResult<()> {
    if Category::parse(category).is_none() {
        tracing::warn!(category, "not one of the snapshot categories");
    }

    let visible = VisibilityStore::new(store).toggle(category)?;
    let shown = visible.iter().any(|c| c == category);

    println!(
        "{} is now {}",
        category,
        if shown { "visible" } else { "hidden" }
    );
    println!("Visible categories: {}", format_list(&visible));
    Ok(())
}

/// Handle `snapshot config`
pub fn handle_config_command(store: &mut FileSettingsStore, args: ConfigArgs) -> SnapshotResult<()> {
    let update = args.into_update();
    if !update.is_empty() {
        store.update_settings(update)?;
        println!("Settings updated.");
        println!();
    }

    let settings = store.settings();
    println!("Data directory:   {}", store.paths().base_dir().display());
    println!("Settings file:    {}", store.paths().settings_file().display());
    println!();
    println!("Currency symbol:  {}", settings.currency_symbol);
    println!("Ledger file:      {}", settings.ledger_file);
    for category in Category::ALL {
        println!(
            "{:<17} {}",
            format!("{} prefix:", category),
            settings.prefixes().prefix(category)
        );
    }
    println!(
        "Visible:          {}",
        format_list(&settings.visible_snapshot_categories)
    );

    Ok(())
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_args_into_update() {
        let update = ConfigArgs {
            currency: Some("€".into()),
            expense_prefix: Some("Aufwand".into()),
            ..Default::default()
        }
        .into_update();

        assert_eq!(update.currency_symbol.as_deref(), Some("€"));
        assert_eq!(update.expense_accounts_prefix.as_deref(), Some("Aufwand"));
        assert!(update.visible_snapshot_categories.is_none());
        assert!(ConfigArgs::default().into_update().is_empty());
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[]), "(none)");
        assert_eq!(
            format_list(&["Assets".to_string(), "Income".to_string()]),
            "Assets, Income"
        );
    }
}
