//! Reports module for ledger-snapshot

pub mod snapshot;

pub use snapshot::{CategoryCard, CategorySnapshotReport};
