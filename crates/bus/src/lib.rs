//! Cinder Event Bus - In-process async event distribution
//!
//! Distributes ledger notifications to subscribers (console printers,
//! projections, etc.)
//!
//! # Design
//! - Async pub/sub with tokio broadcast channel
//! - `EventSubscriber` trait for custom handlers
//! - The bus keeps no history; late subscribers only see later events
//! - Implements the ledger's `EventSink`, so attaching the bus to a
//!   ledger is one call

pub mod channel;
pub mod error;
pub mod event;
pub mod subscriber;

pub use channel::EventBus;
pub use error::BusError;
pub use event::BusEvent;
pub use subscriber::EventSubscriber;
