//! Account balances as handed over by the ledger collaborator
//!
//! [`DailyBalances`] is the per-day balance map computed from the parsed
//! ledger. The snapshot only ever reads it through [`BalanceLookup`], which
//! answers "what is this account's balance" for one displayed date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Balance of one top-level account as of the displayed date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountWithBalance {
    /// Full top-level account name, e.g. `Assets:Bank`
    pub name: String,
    pub balance: f64,
}

impl AccountWithBalance {
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.balance == 0.0
    }
}

/// Lookup of an account's balance as of some fixed date
pub trait BalanceLookup {
    /// `None` means the account has no recorded activity yet
    fn balance_of(&self, account: &str) -> Option<f64>;
}

impl BalanceLookup for HashMap<String, f64> {
    fn balance_of(&self, account: &str) -> Option<f64> {
        self.get(account).copied()
    }
}

impl BalanceLookup for BTreeMap<String, f64> {
    fn balance_of(&self, account: &str) -> Option<f64> {
        self.get(account).copied()
    }
}

/// Per-day account balances, keyed by date then account name
///
/// Serialized as `{ "2024-01-31": { "Assets:Cash": 40.0 } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyBalances(BTreeMap<NaiveDate, HashMap<String, f64>>);

impl DailyBalances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `account`'s balance at the end of `date`
    pub fn insert(&mut self, date: NaiveDate, account: impl Into<String>, balance: f64) {
        self.0.entry(date).or_default().insert(account.into(), balance);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most recent day with any recorded balance
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.0.keys().next_back().copied()
    }

    /// Every account name that appears on any day
    pub fn account_names(&self) -> BTreeSet<String> {
        self.0
            .values()
            .flat_map(|day| day.keys().cloned())
            .collect()
    }

    /// View of the balances as of `date`
    pub fn as_of(&self, date: NaiveDate) -> BalancesAsOf<'_> {
        BalancesAsOf {
            balances: self,
            date,
        }
    }
}

/// Balances as of one date
///
/// An account's balance is the one recorded on the latest day not after
/// `date`; accounts with nothing recorded by then have no balance.
#[derive(Debug, Clone, Copy)]
pub struct BalancesAsOf<'a> {
    balances: &'a DailyBalances,
    date: NaiveDate,
}

impl BalanceLookup for BalancesAsOf<'_> {
    fn balance_of(&self, account: &str) -> Option<f64> {
        self.balances
            .0
            .range(..=self.date)
            .rev()
            .find_map(|(_, day)| day.get(account).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_as_of_uses_latest_recorded_day() {
        let mut balances = DailyBalances::new();
        balances.insert(date(1), "Assets:Cash", 10.0);
        balances.insert(date(5), "Assets:Cash", 25.0);
        balances.insert(date(9), "Assets:Cash", 5.0);

        assert_eq!(balances.as_of(date(1)).balance_of("Assets:Cash"), Some(10.0));
        assert_eq!(balances.as_of(date(7)).balance_of("Assets:Cash"), Some(25.0));
        assert_eq!(balances.as_of(date(30)).balance_of("Assets:Cash"), Some(5.0));
    }

    #[test]
    fn test_as_of_before_first_activity() {
        let mut balances = DailyBalances::new();
        balances.insert(date(5), "Expenses:Food", 12.5);

        assert_eq!(balances.as_of(date(4)).balance_of("Expenses:Food"), None);
        assert_eq!(balances.as_of(date(5)).balance_of("Assets:Cash"), None);
    }

    #[test]
    fn test_account_names_and_latest_date() {
        let mut balances = DailyBalances::new();
        assert_eq!(balances.latest_date(), None);

        balances.insert(date(2), "Assets:Cash", 1.0);
        balances.insert(date(3), "Income:Salary", -1.0);
        balances.insert(date(3), "Assets:Cash", 2.0);

        assert_eq!(balances.latest_date(), Some(date(3)));
        let names: Vec<_> = balances.account_names().into_iter().collect();
        assert_eq!(names, vec!["Assets:Cash", "Income:Salary"]);
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "2024-03-01": { "Assets:Bank:Checking": 100.0 },
            "2024-03-02": { "Assets:Bank:Checking": 80.5, "Expenses:Food": 19.5 }
        }"#;
        let balances: DailyBalances = serde_json::from_str(json).unwrap();

        let view = balances.as_of(date(2));
        assert_eq!(view.balance_of("Assets:Bank:Checking"), Some(80.5));
        assert_eq!(view.balance_of("Expenses:Food"), Some(19.5));
    }
}
