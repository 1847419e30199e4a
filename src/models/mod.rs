//! Core data models for ledger-snapshot
//!
//! Account paths, the four snapshot categories, balances and the account
//! index built from a parsed ledger.

pub mod account;
pub mod balance;
pub mod category;
pub mod ledger;

pub use account::AccountPath;
pub use balance::{AccountWithBalance, BalanceLookup, BalancesAsOf, DailyBalances};
pub use category::{classify, Category, CategoryPrefixes};
pub use ledger::TransactionCache;
