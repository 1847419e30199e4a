//! Account path model
//!
//! Ledger account names are colon-delimited paths such as
//! `Assets:Bank:Checking`. Segment 0 is the category prefix, segment 1 the
//! top-level account shown in the snapshot, and anything deeper is detail
//! that gets folded into the top-level total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SnapshotError, SnapshotResult};

/// Separator between account name segments
pub const SEPARATOR: char = ':';

/// A parsed, well-formed account name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountPath {
    segments: Vec<String>,
}

impl AccountPath {
    /// Parse an account name, rejecting empty names and empty segments
    ///
    /// Segments are kept verbatim; `Equity: Opening` has the segment ` Opening`.
    pub fn parse(name: &str) -> SnapshotResult<Self> {
        if name.is_empty() {
            return Err(SnapshotError::malformed_account(name, "empty account name"));
        }

        let mut segments = Vec::new();
        for segment in name.split(SEPARATOR) {
            if segment.is_empty() {
                return Err(SnapshotError::malformed_account(name, "empty segment"));
            }
            segments.push(segment.to_string());
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments (always at least one)
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The category prefix, i.e. segment 0
    pub fn prefix(&self) -> &str {
        &self.segments[0]
    }

    /// The top-level account this path rolls up into
    ///
    /// `Assets:Bank:Checking` becomes `Assets:Bank`; a bare `Assets` stays as is.
    pub fn top_level(&self) -> AccountPath {
        Self {
            segments: self.segments.iter().take(2).cloned().collect(),
        }
    }

    /// Segment-wise strict prefix test
    ///
    /// `Assets:Bank` is a strict prefix of `Assets:Bank:Checking` but not of
    /// `Assets:Banking` nor of itself.
    pub fn is_strict_prefix_of(&self, other: &AccountPath) -> bool {
        self.depth() < other.depth() && other.segments.starts_with(&self.segments)
    }

    /// Name without the category prefix, used for compact display
    pub fn short_name(&self) -> String {
        if self.depth() > 1 {
            self.segments[1..].join(":")
        } else {
            self.segments[0].clone()
        }
    }
}

impl fmt::Display for AccountPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join(":"))
    }
}

impl FromStr for AccountPath {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccountPath {
    type Error = SnapshotError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<AccountPath> for String {
    fn from(path: AccountPath) -> Self {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segments() {
        let path = AccountPath::parse("Assets:Bank:Checking").unwrap();
        assert_eq!(path.segments(), ["Assets", "Bank", "Checking"]);
        assert_eq!(path.depth(), 3);
        assert_eq!(path.prefix(), "Assets");
        assert_eq!(path.to_string(), "Assets:Bank:Checking");
    }

    #[test]
    fn test_top_level() {
        let deep = AccountPath::parse("Expenses:Food:Restaurants:Lunch").unwrap();
        assert_eq!(deep.top_level().to_string(), "Expenses:Food");

        let bare = AccountPath::parse("Assets").unwrap();
        assert_eq!(bare.top_level(), bare);
    }

    #[test]
    fn test_strict_prefix_is_segment_wise() {
        let bank = AccountPath::parse("Assets:Bank").unwrap();
        let checking = AccountPath::parse("Assets:Bank:Checking").unwrap();
        let banking = AccountPath::parse("Assets:Banking").unwrap();

        assert!(bank.is_strict_prefix_of(&checking));
        assert!(!bank.is_strict_prefix_of(&banking));
        assert!(!bank.is_strict_prefix_of(&bank));
        assert!(!checking.is_strict_prefix_of(&bank));
    }

    #[test]
    fn test_short_name() {
        assert_eq!(
            AccountPath::parse("Assets:Bank:Checking").unwrap().short_name(),
            "Bank:Checking"
        );
        assert_eq!(AccountPath::parse("Income").unwrap().short_name(), "Income");
    }

    #[test]
    fn test_malformed_names() {
        for bad in ["", "Assets::Bank", ":Assets", "Assets:"] {
            let err = AccountPath::parse(bad).unwrap_err();
            assert!(err.is_malformed_account(), "{bad:?} should be rejected");
        }

        let err = AccountPath::parse("Assets::Bank").unwrap_err();
        assert!(err.to_string().contains("'Assets::Bank'"));
    }

    #[test]
    fn test_padded_segments_kept_verbatim() {
        let path = AccountPath::parse("Equity: Opening").unwrap();
        assert_eq!(path.segments(), ["Equity", " Opening"]);
        assert_eq!(path.to_string(), "Equity: Opening");
    }

    #[test]
    fn test_serde_as_string() {
        let path: AccountPath = serde_json::from_str(r#""Liabilities:Card""#).unwrap();
        assert_eq!(path.prefix(), "Liabilities");
        assert_eq!(serde_json::to_string(&path).unwrap(), r#""Liabilities:Card""#);
        assert!(serde_json::from_str::<AccountPath>(r#""Liabilities:""#).is_err());
    }
}
