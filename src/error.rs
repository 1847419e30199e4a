//! Custom error types for ledger-snapshot
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for snapshot operations
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// An account name handed over by the ledger collaborator is not a
    /// well-formed colon-delimited path
    #[error("Malformed account name '{account}': {reason}")]
    MalformedAccount {
        account: String,
        reason: &'static str,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SnapshotError {
    /// Create a malformed-account error
    pub fn malformed_account(account: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedAccount {
            account: account.into(),
            reason,
        }
    }

    /// Check if this is a malformed-account error
    pub fn is_malformed_account(&self) -> bool {
        matches!(self, Self::MalformedAccount { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;
