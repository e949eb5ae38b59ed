//! Amount - Non-negative base-unit quantity of the token
//!
//! All amounts are whole numbers of base units (10^decimals base units
//! per displayed token). `u128` holds the full genesis supply with room
//! to spare, and integer division gives the truncating fee semantics the
//! ledger relies on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative token amount in base units.
///
/// # Invariant
/// Arithmetic never wraps: all operations are checked and callers decide
/// how to surface overflow.
///
/// # Example
/// ```
/// use cinder_core::Amount;
///
/// let amount = Amount::new(2000);
/// let fee = amount.checked_mul(5).and_then(|a| a.checked_div(100));
/// assert_eq!(fee, Some(Amount::new(100)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u128);

impl Amount {
    /// Zero amount constant
    pub const ZERO: Self = Self(0);

    /// Create an Amount from raw base units.
    #[inline]
    pub const fn new(base_units: u128) -> Self {
        Self(base_units)
    }

    /// Create an Amount from whole tokens, scaled by `10^decimals`.
    ///
    /// Returns `None` if the scaled value does not fit in `u128`.
    pub fn from_whole(whole: u128, decimals: u8) -> Option<Self> {
        10u128
            .checked_pow(decimals as u32)
            .and_then(|scale| whole.checked_mul(scale))
            .map(Self)
    }

    /// Get the raw base-unit value
    #[inline]
    pub const fn base_units(&self) -> u128 {
        self.0
    }

    /// Check if the amount is zero
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition - returns `None` on overflow
    pub fn checked_add(&self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction - returns `None` if the result would be negative
    pub fn checked_sub(&self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// Checked multiplication by a scalar - returns `None` on overflow
    pub fn checked_mul(&self, factor: u128) -> Option<Amount> {
        self.0.checked_mul(factor).map(Amount)
    }

    /// Checked truncating division by a scalar - returns `None` for a zero divisor
    pub fn checked_div(&self, divisor: u128) -> Option<Amount> {
        self.0.checked_div(divisor).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(base_units: u128) -> Self {
        Self(base_units)
    }
}

impl From<Amount> for u128 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_base_units() {
        let amount = Amount::new(2000);
        assert_eq!(amount.base_units(), 2000);
    }

    #[test]
    fn test_zero() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn test_from_whole() {
        let supply = Amount::from_whole(1_000_000, 18).unwrap();
        assert_eq!(supply.base_units(), 1_000_000 * 10u128.pow(18));
    }

    #[test]
    fn test_from_whole_overflow() {
        assert!(Amount::from_whole(u128::MAX, 18).is_none());
    }

    #[test]
    fn test_checked_add() {
        let a = Amount::new(100);
        let b = Amount::new(30);
        assert_eq!(a.checked_add(b), Some(Amount::new(130)));
        assert!(Amount::new(u128::MAX).checked_add(Amount::new(1)).is_none());
    }

    #[test]
    fn test_checked_sub_prevents_negative() {
        let a = Amount::new(50);
        let b = Amount::new(100);
        assert!(a.checked_sub(b).is_none());
        assert_eq!(b.checked_sub(a), Some(Amount::new(50)));
    }

    #[test]
    fn test_checked_mul_div_truncates() {
        // 2010 * 5 / 100 = 100.5 -> 100
        let fee = Amount::new(2010)
            .checked_mul(5)
            .and_then(|a| a.checked_div(100));
        assert_eq!(fee, Some(Amount::new(100)));
    }

    #[test]
    fn test_checked_div_zero_divisor() {
        assert!(Amount::new(100).checked_div(0).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(12345).to_string(), "12345");
    }

    #[test]
    fn test_serde_roundtrip() {
        let amount = Amount::from_whole(1_000_000, 18).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        let parsed: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, parsed);
    }
}
