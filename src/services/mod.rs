//! Service layer for ledger-snapshot
//!
//! Pure operations over the models: rolling account balances up into
//! category summaries, and toggling which categories the snapshot shows.

pub mod aggregation;
pub mod visibility;

pub use aggregation::{
    aggregate_category, category_total, top_level_accounts_with_balances, AccountTree,
};
pub use visibility::{toggle_category, VisibilityStore};
