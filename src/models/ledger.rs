//! Account index derived from a parsed ledger
//!
//! The ledger parser hands the snapshot a flat list of account names. The
//! [`TransactionCache`] keeps that full list (needed to tell leaf accounts
//! from intermediate ones) and files every name under its category.
//! Names that match no configured prefix are kept aside rather than lost.

use std::collections::BTreeSet;

use super::account::AccountPath;
use super::category::{classify, Category, CategoryPrefixes};
use crate::error::SnapshotResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionCache {
    /// Every known account name, sorted and deduplicated
    pub accounts: Vec<String>,
    pub asset_accounts: Vec<String>,
    pub liability_accounts: Vec<String>,
    pub income_accounts: Vec<String>,
    pub expense_accounts: Vec<String>,
    /// Names whose first segment matches none of the prefixes
    pub unclassified: Vec<String>,
}

impl TransactionCache {
    /// Index `names` by category
    ///
    /// Fails on the first malformed account name.
    pub fn from_accounts<I, S>(names: I, prefixes: &CategoryPrefixes) -> SnapshotResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique = BTreeSet::new();
        for name in names {
            let name = name.as_ref();
            AccountPath::parse(name)?;
            unique.insert(name.to_string());
        }

        let mut cache = Self::default();
        for name in &unique {
            match classify(name, prefixes) {
                Some(category) => cache.accounts_in_mut(category).push(name.clone()),
                None => cache.unclassified.push(name.clone()),
            }
        }
        cache.accounts = unique.into_iter().collect();

        if !cache.unclassified.is_empty() {
            tracing::debug!(
                count = cache.unclassified.len(),
                accounts = ?cache.unclassified,
                "accounts outside every snapshot category"
            );
        }

        Ok(cache)
    }

    /// Account names filed under `category`
    pub fn accounts_in(&self, category: Category) -> &[String] {
        match category {
            Category::Assets => &self.asset_accounts,
            Category::Liabilities => &self.liability_accounts,
            Category::Income => &self.income_accounts,
            Category::Expenses => &self.expense_accounts,
        }
    }

    fn accounts_in_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Assets => &mut self.asset_accounts,
            Category::Liabilities => &mut self.liability_accounts,
            Category::Income => &mut self.income_accounts,
            Category::Expenses => &mut self.expense_accounts,
        }
    }
}
