//! Category Snapshot Report
//!
//! One card per visible category: the category total, and the top-level
//! accounts that make it up, largest balances first.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::config::Settings;
use crate::display::format::{double_separator, format_balance, separator, short_account_name, truncate};
use crate::error::SnapshotResult;
use crate::models::{AccountWithBalance, Category, DailyBalances, TransactionCache};
use crate::services::aggregation::{aggregate_category, category_total};

const REPORT_WIDTH: usize = 50;
const NAME_WIDTH: usize = 32;

/// Summary of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCard {
    pub category: Category,
    /// Sum of all top-level balances
    pub total: f64,
    /// Top-level accounts, ordered by name
    pub accounts: Vec<AccountWithBalance>,
}

impl CategoryCard {
    pub fn new(category: Category, accounts: Vec<AccountWithBalance>) -> Self {
        Self {
            category,
            total: category_total(&accounts),
            accounts,
        }
    }

    /// Check if any top-level account has a non-zero balance
    pub fn has_data(&self) -> bool {
        self.accounts.iter().any(|a| !a.is_zero())
    }

    /// Non-zero accounts, largest absolute balance first
    pub fn rows(&self) -> Vec<&AccountWithBalance> {
        let mut rows: Vec<_> = self.accounts.iter().filter(|a| !a.is_zero()).collect();
        rows.sort_by(|a, b| b.balance.abs().total_cmp(&a.balance.abs()));
        rows
    }
}

/// Snapshot of every visible category as of one date
#[derive(Debug, Clone, Serialize)]
pub struct CategorySnapshotReport {
    /// Date the balances were taken at; `None` when nothing was recorded
    pub date: Option<NaiveDate>,
    pub currency_symbol: String,
    pub cards: Vec<CategoryCard>,
    /// Accounts that belong to no category
    pub unclassified: Vec<String>,
}

impl CategorySnapshotReport {
    /// Generate the snapshot for the categories visible in `settings`
    ///
    /// Without an explicit `date` the latest recorded day is used.
    pub fn generate(
        cache: &TransactionCache,
        balances: &DailyBalances,
        date: Option<NaiveDate>,
        settings: &Settings,
    ) -> SnapshotResult<Self> {
        let date = date.or_else(|| balances.latest_date());

        let mut cards = Vec::new();
        for category in settings.visible_categories() {
            let accounts = match date {
                Some(date) => aggregate_category(cache, category, &balances.as_of(date))?,
                None => aggregate_category(cache, category, &HashMap::<String, f64>::new())?,
            };
            cards.push(CategoryCard::new(category, accounts));
        }

        tracing::info!(
            date = ?date,
            categories = cards.len(),
            "generated category snapshot"
        );

        Ok(Self {
            date,
            currency_symbol: settings.currency_symbol.clone(),
            cards,
            unclassified: cache.unclassified.clone(),
        })
    }

    /// Generate the snapshot straight from a daily balance map
    ///
    /// The account index is built from every account that appears in
    /// `balances`, classified with the prefixes from `settings`.
    pub fn from_balances(
        balances: &DailyBalances,
        date: Option<NaiveDate>,
        settings: &Settings,
    ) -> SnapshotResult<Self> {
        let cache = TransactionCache::from_accounts(balances.account_names(), &settings.prefixes())?;
        Self::generate(&cache, balances, date, settings)
    }

    /// Card for `category`, if it is visible
    pub fn card(&self, category: Category) -> Option<&CategoryCard> {
        self.cards.iter().find(|c| c.category == category)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        match self.date {
            Some(date) => output.push_str(&format!("Financial Snapshot ({})\n", date)),
            None => output.push_str("Financial Snapshot\n"),
        }
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');

        if self.cards.is_empty() {
            output.push_str("No categories selected.\n");
            output.push_str("Run 'snapshot toggle <category>' to show one.\n");
            return output;
        }

        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }

            let total = if card.has_data() { card.total } else { 0.0 };
            output.push_str(&format!(
                "{:<name_w$} {:>amount_w$}\n",
                card.category,
                format_balance(total, &self.currency_symbol),
                name_w = NAME_WIDTH + 2,
                amount_w = REPORT_WIDTH - NAME_WIDTH - 3,
            ));
            output.push_str(&separator(REPORT_WIDTH));
            output.push('\n');

            if !card.has_data() {
                output.push_str("  No data available\n");
                continue;
            }

            for account in card.rows() {
                output.push_str(&format!(
                    "  {:<name_w$} {:>amount_w$}\n",
                    truncate(&short_account_name(&account.name), NAME_WIDTH),
                    format_balance(account.balance, &self.currency_symbol),
                    name_w = NAME_WIDTH,
                    amount_w = REPORT_WIDTH - NAME_WIDTH - 3,
                ));
            }
        }

        output
    }
}
