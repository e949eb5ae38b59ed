//! Ledger errors
//!
//! Every precondition violation aborts the whole operation before any
//! state change. The two balance messages are caller-visible contract
//! strings and must not be reworded.

use thiserror::Error;

/// Errors that can occur in ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A debit asked for more than the account currently holds.
    #[error("You can't take more than what is available")]
    InsufficientBalance,

    /// An approval asked for more than the owner's balance at approval time.
    #[error("Balance is not enough")]
    InsufficientApprovalBalance,

    /// A delegated transfer asked for more than the granted allowance.
    #[error("You can't spend more than the allowance")]
    InsufficientAllowance,

    /// Balance, supply, or fee arithmetic left the numeric range.
    #[error("Amount is outside the ledger's numeric range")]
    Overflow,
}
