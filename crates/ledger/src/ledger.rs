//! The ledger state machine
//!
//! One `Ledger` owns all balances, allowances, and the total supply for a
//! single fixed-supply asset. Every mutating operation is one atomic step:
//! preconditions are checked and all new values are computed before the
//! first write, so a failed call leaves state untouched.
//!
//! The ledger has no internal locking. Mutations take `&mut self`, which
//! enforces the single-writer model; a host exposing it to concurrent
//! callers must serialize calls around the whole structure.

use std::collections::HashMap;
use std::sync::Arc;

use cinder_core::{AccountId, Amount, TokenMetadata};

use crate::error::LedgerError;
use crate::event::{EventSink, TokenEvent};
use crate::fee::split_burn;

/// Display precision of the asset
pub const DECIMALS: u8 = 18;

/// Whole tokens minted at genesis
pub const GENESIS_WHOLE_TOKENS: u128 = 1_000_000;

/// Base units minted at genesis, all credited to the deployer
pub const GENESIS_SUPPLY: Amount =
    Amount::new(GENESIS_WHOLE_TOKENS * 10u128.pow(DECIMALS as u32));

/// Fixed-supply accounting engine with a burn on every transfer
pub struct Ledger {
    metadata: TokenMetadata,
    total_supply: Amount,
    balances: HashMap<AccountId, Amount>,
    allowances: HashMap<AccountId, HashMap<AccountId, Amount>>,
    sinks: Vec<Arc<dyn EventSink>>,
}

impl Ledger {
    /// Create a ledger with the genesis supply credited to `deployer`.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, deployer: AccountId) -> Self {
        let mut balances = HashMap::new();
        balances.insert(deployer, GENESIS_SUPPLY);

        Self {
            metadata: TokenMetadata::new(name, symbol, DECIMALS),
            total_supply: GENESIS_SUPPLY,
            balances,
            allowances: HashMap::new(),
            sinks: Vec::new(),
        }
    }

    /// Attach a notification sink. Every subsequent successful mutation
    /// publishes one event to it.
    pub fn attach_sink(&mut self, sink: Arc<dyn EventSink>) {
        self.sinks.push(sink);
    }

    // === Queries ===

    /// Configured asset name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Configured ticker symbol
    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    /// Display precision
    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    /// Full asset metadata
    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// Current total supply (non-increasing after genesis)
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Balance of `account`; unknown accounts hold zero
    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    /// Current allowance for the (owner, spender) pair; zero if unset
    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(owner)
            .and_then(|granted| granted.get(spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Verify that the sum of all balances equals the recorded supply.
    pub fn is_conserved(&self) -> bool {
        let mut sum = Amount::ZERO;
        for balance in self.balances.values() {
            sum = match sum.checked_add(*balance) {
                Some(total) => total,
                None => return false,
            };
        }
        sum == self.total_supply
    }

    // === Mutations ===

    /// Move `amount` from `sender` to `recipient`, burning the fee.
    ///
    /// The sender is debited the gross amount, the recipient is credited
    /// the net amount, and the fee leaves the supply entirely. Emits a
    /// `Transfer` carrying the net amount.
    pub fn transfer(
        &mut self,
        sender: &AccountId,
        recipient: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if self.balance_of(sender) < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        let (fee, net) = split_burn(amount)?;
        self.apply_move(sender, recipient, amount, net, fee)?;

        self.publish(TokenEvent::transfer(sender.clone(), recipient.clone(), net));
        Ok(())
    }

    /// Grant `spender` the right to move up to `amount` out of `owner`'s
    /// balance, replacing any prior allowance for the pair.
    ///
    /// The amount is bounded by the owner's balance at approval time only;
    /// the allowance is not revisited if the balance later drops.
    pub fn approve(
        &mut self,
        owner: &AccountId,
        spender: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if self.balance_of(owner) < amount {
            return Err(LedgerError::InsufficientApprovalBalance);
        }

        self.allowances
            .entry(owner.clone())
            .or_default()
            .insert(spender.clone(), amount);
        debug_assert!(self.is_conserved());

        self.publish(TokenEvent::approval(owner.clone(), spender.clone(), amount));
        Ok(())
    }

    /// Move `amount` from `owner` to `recipient` on `spender`'s authority.
    ///
    /// Fee arithmetic matches `transfer`. The allowance is consumed at the
    /// gross rate even though the recipient only receives the net amount.
    pub fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        recipient: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let granted = self.allowance(owner, spender);
        if granted < amount {
            return Err(LedgerError::InsufficientAllowance);
        }
        if self.balance_of(owner) < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        let (fee, net) = split_burn(amount)?;
        let remaining = granted.checked_sub(amount).ok_or(LedgerError::Overflow)?;

        self.apply_move(owner, recipient, amount, net, fee)?;
        self.allowances
            .entry(owner.clone())
            .or_default()
            .insert(spender.clone(), remaining);

        self.publish(TokenEvent::transfer(owner.clone(), recipient.clone(), net));
        Ok(())
    }

    /// Apply the debit/credit/burn triple for one transfer.
    ///
    /// Callers must have validated the balance precondition. All new
    /// values are computed before the first write so the triple commits
    /// as a unit or not at all.
    fn apply_move(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        gross: Amount,
        net: Amount,
        fee: Amount,
    ) -> Result<(), LedgerError> {
        let supply = self
            .total_supply
            .checked_sub(fee)
            .ok_or(LedgerError::Overflow)?;

        if from == to {
            // self-transfer collapses to a single account losing the fee
            let updated = self
                .balance_of(from)
                .checked_sub(gross)
                .and_then(|debited| debited.checked_add(net))
                .ok_or(LedgerError::Overflow)?;

            self.balances.insert(from.clone(), updated);
        } else {
            let debited = self
                .balance_of(from)
                .checked_sub(gross)
                .ok_or(LedgerError::Overflow)?;
            let credited = self
                .balance_of(to)
                .checked_add(net)
                .ok_or(LedgerError::Overflow)?;

            self.balances.insert(from.clone(), debited);
            self.balances.insert(to.clone(), credited);
        }

        self.total_supply = supply;
        debug_assert!(self.is_conserved());
        Ok(())
    }

    fn publish(&self, event: TokenEvent) {
        for sink in &self.sinks {
            sink.publish(event.clone());
        }
    }
}
