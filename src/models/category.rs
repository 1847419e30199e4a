//! Snapshot categories and account classification
//!
//! Every account belongs to at most one of four fixed categories, decided by
//! an exact match of its first segment against the configured prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::account::SEPARATOR;
use crate::error::SnapshotError;

/// Top-level classification of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Assets,
    Liabilities,
    Income,
    Expenses,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Assets,
        Category::Liabilities,
        Category::Income,
        Category::Expenses,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assets => "Assets",
            Self::Liabilities => "Liabilities",
            Self::Income => "Income",
            Self::Expenses => "Expenses",
        }
    }

    /// Prefix used when the settings don't override it
    pub fn default_prefix(&self) -> &'static str {
        self.as_str()
    }

    /// Parse a category from its name (exact match)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            SnapshotError::Validation(format!(
                "Unknown category: '{}'. Valid categories: Assets, Liabilities, Income, Expenses",
                s
            ))
        })
    }
}

/// Account name prefix configured for each category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPrefixes {
    assets: String,
    liabilities: String,
    income: String,
    expenses: String,
}

impl CategoryPrefixes {
    pub fn new(
        assets: impl Into<String>,
        liabilities: impl Into<String>,
        income: impl Into<String>,
        expenses: impl Into<String>,
    ) -> Self {
        Self {
            assets: assets.into(),
            liabilities: liabilities.into(),
            income: income.into(),
            expenses: expenses.into(),
        }
    }

    /// The prefix configured for `category`
    pub fn prefix(&self, category: Category) -> &str {
        match category {
            Category::Assets => &self.assets,
            Category::Liabilities => &self.liabilities,
            Category::Income => &self.income,
            Category::Expenses => &self.expenses,
        }
    }

    /// Find the category whose prefix equals `first_segment`
    ///
    /// If two categories share a prefix the one earlier in display order wins.
    pub fn category_for(&self, first_segment: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| self.prefix(*c) == first_segment)
    }
}

impl Default for CategoryPrefixes {
    fn default() -> Self {
        Self::new(
            Category::Assets.default_prefix(),
            Category::Liabilities.default_prefix(),
            Category::Income.default_prefix(),
            Category::Expenses.default_prefix(),
        )
    }
}

/// Classify an account name by its first segment
///
/// Comparison is exact: no case folding and no partial matches. Accounts
/// whose first segment matches no prefix yield `None`.
pub fn classify(account_name: &str, prefixes: &CategoryPrefixes) -> Option<Category> {
    let first = account_name.split(SEPARATOR).next()?;
    prefixes.category_for(first)
}
