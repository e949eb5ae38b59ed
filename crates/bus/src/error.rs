//! Event bus errors

use thiserror::Error;

/// Errors that can occur in the event bus
#[derive(Error, Debug)]
pub enum BusError {
    #[error("Subscriber '{name}' failed: {reason}")]
    SubscriberFailed { name: String, reason: String },

    #[error("Receiver lagged behind, {0} events skipped")]
    Lagged(u64),

    #[error("Channel closed")]
    ChannelClosed,
}
