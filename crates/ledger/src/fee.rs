//! Burn fee arithmetic
//!
//! Every transfer destroys a fixed percentage of the moved value. The fee
//! uses truncating integer division, so amounts not divisible by 20 lose
//! the fractional part of the fee in the sender's favor.

use cinder_core::Amount;

use crate::error::LedgerError;

/// Percentage of every transfer that is burned
pub const BURN_RATE_PERCENT: u128 = 5;

/// Split a gross transfer amount into `(fee, net)`.
///
/// `fee = floor(amount * BURN_RATE_PERCENT / 100)`, `net = amount - fee`.
/// The fee is destroyed; the net amount is what the recipient receives.
pub fn split_burn(amount: Amount) -> Result<(Amount, Amount), LedgerError> {
    let fee = amount
        .checked_mul(BURN_RATE_PERCENT)
        .and_then(|scaled| scaled.checked_div(100))
        .ok_or(LedgerError::Overflow)?;
    // fee never exceeds amount for a rate below 100%, so this cannot underflow
    let net = amount.checked_sub(fee).ok_or(LedgerError::Overflow)?;
    Ok((fee, net))
}
