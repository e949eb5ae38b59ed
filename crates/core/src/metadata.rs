//! TokenMetadata - Immutable asset metadata
//!
//! Fixed at ledger construction and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Asset metadata: human-readable name, ticker symbol, display precision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Human-readable name ("Cinder Token")
    pub name: String,

    /// Ticker symbol ("CIN")
    pub symbol: String,

    /// Number of decimal places (display only; balances are base units)
    pub decimals: u8,
}

impl TokenMetadata {
    /// Create new metadata
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }
}
