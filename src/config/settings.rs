//! User settings for ledger-snapshot
//!
//! Holds the currency symbol, the ledger file location, the four category
//! prefixes and the list of snapshot categories the user wants to see.
//! Settings are plain values: changes are expressed as a [`SettingsUpdate`]
//! merged into the current value, and persisting the result is left to the
//! caller.

use serde::{Deserialize, Serialize};

use super::paths::SnapshotPaths;
use crate::error::SnapshotError;
use crate::models::category::{Category, CategoryPrefixes};
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for ledger-snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Position in the onboarding walkthrough
    #[serde(default)]
    pub tutorial_index: u32,

    /// Currency symbol used when formatting balances
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Ledger file the balances were derived from
    #[serde(default = "default_ledger_file")]
    pub ledger_file: String,

    #[serde(default = "default_asset_prefix")]
    pub asset_accounts_prefix: String,

    #[serde(default = "default_liability_prefix")]
    pub liability_accounts_prefix: String,

    #[serde(default = "default_income_prefix")]
    pub income_accounts_prefix: String,

    #[serde(default = "default_expense_prefix")]
    pub expense_accounts_prefix: String,

    /// Categories shown in the snapshot, in the order they were enabled
    #[serde(default = "default_visible_categories")]
    pub visible_snapshot_categories: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_ledger_file() -> String {
    "transactions.ledger".to_string()
}

fn default_asset_prefix() -> String {
    Category::Assets.default_prefix().to_string()
}

fn default_liability_prefix() -> String {
    Category::Liabilities.default_prefix().to_string()
}

fn default_income_prefix() -> String {
    Category::Income.default_prefix().to_string()
}

fn default_expense_prefix() -> String {
    Category::Expenses.default_prefix().to_string()
}

fn default_visible_categories() -> Vec<String> {
    Category::ALL.iter().map(|c| c.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            tutorial_index: 0,
            currency_symbol: default_currency(),
            ledger_file: default_ledger_file(),
            asset_accounts_prefix: default_asset_prefix(),
            liability_accounts_prefix: default_liability_prefix(),
            income_accounts_prefix: default_income_prefix(),
            expense_accounts_prefix: default_expense_prefix(),
            visible_snapshot_categories: default_visible_categories(),
        }
    }
}

/// A partial settings change; `None` fields leave the current value alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutorial_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_accounts_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liability_accounts_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_accounts_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_accounts_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_snapshot_categories: Option<Vec<String>>,
}

impl SettingsUpdate {
    /// An update that only replaces the visibility list
    pub fn visible_categories(list: Vec<String>) -> Self {
        Self {
            visible_snapshot_categories: Some(list),
            ..Default::default()
        }
    }

    /// Check if the update changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Settings {
    /// Return the settings with `update` merged in
    pub fn apply(&self, update: SettingsUpdate) -> Settings {
        let mut next = self.clone();
        if let Some(v) = update.tutorial_index {
            next.tutorial_index = v;
        }
        if let Some(v) = update.currency_symbol {
            next.currency_symbol = v;
        }
        if let Some(v) = update.ledger_file {
            next.ledger_file = v;
        }
        if let Some(v) = update.asset_accounts_prefix {
            next.asset_accounts_prefix = v;
        }
        if let Some(v) = update.liability_accounts_prefix {
            next.liability_accounts_prefix = v;
        }
        if let Some(v) = update.income_accounts_prefix {
            next.income_accounts_prefix = v;
        }
        if let Some(v) = update.expense_accounts_prefix {
            next.expense_accounts_prefix = v;
        }
        if let Some(v) = update.visible_snapshot_categories {
            next.visible_snapshot_categories = v;
        }
        next
    }

    /// The configured category prefixes
    pub fn prefixes(&self) -> CategoryPrefixes {
        CategoryPrefixes::new(
            &self.asset_accounts_prefix,
            &self.liability_accounts_prefix,
            &self.income_accounts_prefix,
            &self.expense_accounts_prefix,
        )
    }

    /// Visible categories in display order
    ///
    /// Entries of the visibility list that name no category are ignored here;
    /// they stay in the stored list untouched.
    pub fn visible_categories(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|c| self.is_visible(*c))
            .collect()
    }

    /// Check if a category is in the visibility list
    pub fn is_visible(&self, category: Category) -> bool {
        let name = category.as_str();
        self.visible_snapshot_categories.iter().any(|v| v == name)
    }

    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &SnapshotPaths) -> Result<Self, SnapshotError> {
        let settings_path = paths.settings_file();
        read_json(&settings_path).map_err(|e| {
            SnapshotError::Config(format!("Failed to load settings file: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SnapshotPaths) -> Result<(), SnapshotError> {
        paths.ensure_directories()?;
        let settings_path = paths.settings_file();
        write_json_atomic(&settings_path, self)?;
        tracing::debug!(path = %settings_path.display(), "settings saved");
        Ok(())
    }
}
