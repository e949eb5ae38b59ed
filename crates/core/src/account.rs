//! AccountId - Opaque account identifiers
//!
//! The ledger does not interpret account identifiers; any non-structured
//! string names an account. An account with no ledger entry simply has a
//! zero balance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An account identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new AccountId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let account = AccountId::new("alice");
        assert_eq!(account.to_string(), "alice");
        assert_eq!(account.as_str(), "alice");
    }

    #[test]
    fn test_from_conversions() {
        let from_str: AccountId = "bob".into();
        let from_string: AccountId = String::from("bob").into();
        assert_eq!(from_str, from_string);
    }

    #[test]
    fn test_serde_as_plain_string() {
        let account = AccountId::new("alice");
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, "\"alice\"");
        let parsed: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(account, parsed);
    }
}
