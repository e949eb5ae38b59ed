//! Bus envelope for ledger notifications

use chrono::{DateTime, Utc};
use cinder_ledger::TokenEvent;
use serde::{Deserialize, Serialize};

/// A ledger notification as distributed on the bus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusEvent {
    /// The ledger's notification record
    pub event: TokenEvent,
    /// When the bus accepted the event
    pub published_at: DateTime<Utc>,
}

impl BusEvent {
    /// Wrap a ledger event with the current timestamp
    pub fn now(event: TokenEvent) -> Self {
        Self {
            event,
            published_at: Utc::now(),
        }
    }
}
