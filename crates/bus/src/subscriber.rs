//! Event subscriber trait for async event handling

use async_trait::async_trait;

use crate::error::BusError;
use crate::event::BusEvent;

/// Trait for event subscribers
///
/// Subscribers receive every event published after they attach. Handlers
/// should be idempotent; the bus does not retry failed deliveries.
#[async_trait]
pub trait EventSubscriber: Send + Sync {
    /// Get the subscriber name (for logging)
    fn name(&self) -> &str;

    /// Handle one bus event
    ///
    /// Called once per event published to the bus. Errors are logged by
    /// the forwarding task and do not stop delivery of later events.
    async fn handle(&self, event: &BusEvent) -> Result<(), BusError>;
}
