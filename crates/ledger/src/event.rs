//! Ledger notifications
//!
//! Each successful mutating operation hands one immutable record to every
//! attached sink. Delivery is entirely the sink's concern; the accounting
//! engine never blocks on it and operation results never carry events.

use cinder_core::{AccountId, Amount};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Notifications emitted by the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEvent {
    /// Value moved between accounts. `amount` is the net amount credited
    /// to the recipient, after the burn fee was deducted.
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: Amount,
    },

    /// A spending limit was granted by `owner` to `spender`.
    Approval {
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    },
}

impl TokenEvent {
    /// Create a Transfer event carrying the net credited amount
    pub fn transfer(from: AccountId, to: AccountId, amount: Amount) -> Self {
        Self::Transfer { from, to, amount }
    }

    /// Create an Approval event
    pub fn approval(owner: AccountId, spender: AccountId, amount: Amount) -> Self {
        Self::Approval {
            owner,
            spender,
            amount,
        }
    }
}

/// Receiver for ledger notifications
///
/// Implementations must not assume they are the only sink attached.
pub trait EventSink: Send + Sync {
    /// Accept one notification record
    fn publish(&self, event: TokenEvent);
}

/// Sink that records every event in memory
///
/// Used by tests and audits to observe what the ledger emitted.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<TokenEvent>>,
}

impl MemorySink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, in emission order
    pub fn events(&self) -> Vec<TokenEvent> {
        self.lock().clone()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if nothing was recorded yet
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<TokenEvent>> {
        // a sink holds no invariants worth dying for; recover from poison
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EventSink for MemorySink {
    fn publish(&self, event: TokenEvent) {
        self.lock().push(event);
    }
}
