//! Category balance aggregation
//!
//! Rolls the balances of hierarchical accounts up into one entry per
//! top-level account (`Assets:Bank:Checking` and `Assets:Bank:Savings` both
//! land in `Assets:Bank`) and sums those entries into a category total.
//!
//! Only leaf accounts contribute. An intermediate account that also has
//! children (say a posting made directly to `Assets:Bank`) is skipped so
//! that nothing is counted twice.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::SnapshotResult;
use crate::models::{AccountPath, AccountWithBalance, BalanceLookup, Category, TransactionCache};

/// Segment trie over every known account, used to tell leaves from parents
#[derive(Debug, Default)]
pub struct AccountTree {
    root: Node,
}

#[derive(Debug, Default)]
struct Node {
    children: BTreeMap<String, Node>,
}

impl AccountTree {
    /// Build the tree from raw account names
    pub fn build<S: AsRef<str>>(names: &[S]) -> SnapshotResult<Self> {
        let mut tree = Self::default();
        for name in names {
            tree.insert(&AccountPath::parse(name.as_ref())?);
        }
        Ok(tree)
    }

    pub fn insert(&mut self, path: &AccountPath) {
        let mut node = &mut self.root;
        for segment in path.segments() {
            node = node.children.entry(segment.clone()).or_default();
        }
    }

    /// Check if no known account lies strictly below `path`
    ///
    /// Paths the tree has never seen are leaves as well.
    pub fn is_leaf(&self, path: &AccountPath) -> bool {
        let mut node = &self.root;
        for segment in path.segments() {
            match node.children.get(segment) {
                Some(child) => node = child,
                None => return true,
            }
        }
        node.children.is_empty()
    }
}

/// Roll the accounts of one category up into top-level summaries
///
/// `accounts` are the names filed under the category, `all_accounts` every
/// account known to the ledger. Accounts without a balance count as zero.
/// The result holds one entry per distinct top-level account, ordered by
/// name; an empty category gives an empty list.
pub fn top_level_accounts_with_balances<S, K, L>(
    accounts: &[S],
    balances: &L,
    all_accounts: &[K],
) -> SnapshotResult<Vec<AccountWithBalance>>
where
    S: AsRef<str>,
    K: AsRef<str>,
    L: BalanceLookup + ?Sized,
{
    let tree = AccountTree::build(all_accounts)?;

    let mut seen = BTreeSet::new();
    let mut groups: BTreeMap<String, f64> = BTreeMap::new();
    for name in accounts {
        let name = name.as_ref();
        let path = AccountPath::parse(name)?;
        if !seen.insert(path.clone()) {
            continue;
        }

        let total = groups.entry(path.top_level().to_string()).or_insert(0.0);
        if tree.is_leaf(&path) {
            *total += balances.balance_of(name).unwrap_or(0.0);
        } else {
            tracing::trace!(account = name, "skipping intermediate account");
        }
    }

    Ok(groups
        .into_iter()
        .map(|(name, balance)| AccountWithBalance { name, balance })
        .collect())
}

/// Sum of all balances in `accounts`
pub fn category_total(accounts: &[AccountWithBalance]) -> f64 {
    accounts.iter().fold(0.0, |total, a| total + a.balance)
}

/// Top-level summaries for one category of a transaction cache
pub fn aggregate_category<L>(
    cache: &TransactionCache,
    category: Category,
    balances: &L,
) -> SnapshotResult<Vec<AccountWithBalance>>
where
    L: BalanceLookup + ?Sized,
{
    let summaries =
        top_level_accounts_with_balances(cache.accounts_in(category), balances, &cache.accounts)?;
    tracing::debug!(
        %category,
        top_level = summaries.len(),
        total = category_total(&summaries),
        "aggregated category"
    );
    Ok(summaries)
}
