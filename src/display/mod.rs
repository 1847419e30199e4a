//! Display formatting for terminal output

pub mod format;

pub use format::{format_balance, short_account_name};
