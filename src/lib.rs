//! ledger-snapshot - per-category balance snapshot for plain-text ledgers
//!
//! Takes the account balances of an already parsed ledger and summarizes
//! them per category (Assets, Liabilities, Income, Expenses): child accounts
//! are rolled up into their top-level account, and each category gets a
//! total. Which categories are shown is a user setting, toggled one
//! category at a time.
//!
//! # Architecture
//!
//! - `models`: account paths, categories, balances, the account index
//! - `services`: aggregation and visibility toggling (pure functions)
//! - `reports`: the category snapshot report
//! - `display`: balance and text formatting
//! - `export`: CSV, JSON and YAML output
//! - `config`: paths, settings and the settings persistence seam
//! - `storage`: JSON file helpers
//! - `cli`: command handlers used by the `snapshot` binary
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use ledger_snapshot::services::{category_total, top_level_accounts_with_balances};
//!
//! let accounts = ["Assets:Bank:Checking", "Assets:Bank:Savings", "Assets:Cash"];
//! let balances: HashMap<String, f64> = [
//!     ("Assets:Bank:Checking".to_string(), 100.0),
//!     ("Assets:Bank:Savings".to_string(), 250.0),
//!     ("Assets:Cash".to_string(), 40.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let summaries = top_level_accounts_with_balances(&accounts, &balances, &accounts)?;
//! assert_eq!(summaries.len(), 2);
//! assert_eq!(category_total(&summaries), 390.0);
//! # Ok::<(), ledger_snapshot::SnapshotError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SnapshotError, SnapshotResult};
