//! Cinder Ledger - Fixed-supply accounting engine
//!
//! This is the HEART of Cinder. All balance, allowance, and supply state
//! lives here and changes only through the ledger's own operations.
//!
//! # Key Types
//! - `Ledger`: Balances, allowances, and total supply behind one state machine
//! - `TokenEvent`: Notification record emitted once per successful mutation
//! - `EventSink`: Delivery seam so accounting stays independent of transport
//! - `LedgerError`: The operation error taxonomy

pub mod error;
pub mod event;
pub mod fee;
pub mod ledger;

pub use error::LedgerError;
pub use event::{EventSink, MemorySink, TokenEvent};
pub use fee::{split_burn, BURN_RATE_PERCENT};
pub use ledger::{Ledger, DECIMALS, GENESIS_SUPPLY, GENESIS_WHOLE_TOKENS};
