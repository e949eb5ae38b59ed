//! Broadcast channel distribution

use std::sync::Arc;

use cinder_ledger::{EventSink, TokenEvent};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::event::BusEvent;
use crate::subscriber::EventSubscriber;

/// Fan-out bus for ledger notifications
///
/// Wraps a tokio broadcast channel. Cloning the bus clones the sender
/// side; the channel closes when every clone is dropped.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<BusEvent>,
}

impl EventBus {
    /// Create a bus with the given per-receiver buffer capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe a raw broadcast receiver
    ///
    /// The receiver sees every event published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<BusEvent> {
        self.sender.subscribe()
    }

    /// Number of currently attached receivers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Spawn a forwarding task that drives `subscriber` from this bus.
    ///
    /// The task logs handler failures and lag, and stops once the channel
    /// closes. The returned handle can be awaited for a clean shutdown.
    pub fn attach(&self, subscriber: Arc<dyn EventSubscriber>) -> JoinHandle<()> {
        let mut receiver = self.subscribe();
        tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => {
                        if let Err(err) = subscriber.handle(&event).await {
                            tracing::warn!(
                                subscriber = subscriber.name(),
                                error = %err,
                                "subscriber failed to handle event"
                            );
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            subscriber = subscriber.name(),
                            skipped,
                            "subscriber lagged behind the bus"
                        );
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}

impl EventSink for EventBus {
    fn publish(&self, event: TokenEvent) {
        let envelope = BusEvent::now(event);
        // send only fails when nobody is subscribed, which is not an
        // error from the ledger's point of view
        if self.sender.send(envelope).is_err() {
            tracing::trace!("event dropped, no subscribers attached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinder_core::{AccountId, Amount};
    use cinder_ledger::Ledger;
    use tokio::sync::mpsc;

    use crate::error::BusError;

    #[tokio::test]
    async fn test_publish_reaches_receiver() {
        let bus = EventBus::new(16);
        let mut receiver = bus.subscribe();

        let event = TokenEvent::approval("alice".into(), "bob".into(), Amount::new(500));
        bus.publish(event.clone());

        let received = receiver.recv().await.unwrap();
        assert_eq!(received.event, event);
    }

    #[tokio::test]
    async fn test_publish_without_receivers_is_silent() {
        let bus = EventBus::new(16);
        // no subscriber attached; must not panic or error
        bus.publish(TokenEvent::transfer("a".into(), "b".into(), Amount::ZERO));
    }

    #[tokio::test]
    async fn test_ledger_publishes_through_bus() {
        let bus = EventBus::new(16);
        let mut receiver = bus.subscribe();

        let deployer = AccountId::new("deployer");
        let mut ledger = Ledger::new("Cinder Token", "CIN", deployer.clone());
        ledger.attach_sink(Arc::new(bus.clone()));

        ledger
            .transfer(&deployer, &AccountId::new("alice"), Amount::new(2000))
            .unwrap();

        let received = receiver.recv().await.unwrap();
        assert_eq!(
            received.event,
            TokenEvent::transfer(deployer, AccountId::new("alice"), Amount::new(1900))
        );
    }

    /// Subscriber that forwards events into an mpsc channel
    struct ForwardingSubscriber {
        tx: mpsc::UnboundedSender<BusEvent>,
    }

    #[async_trait::async_trait]
    impl EventSubscriber for ForwardingSubscriber {
        fn name(&self) -> &str {
            "forwarding"
        }

        async fn handle(&self, event: &BusEvent) -> Result<(), BusError> {
            self.tx
                .send(event.clone())
                .map_err(|_| BusError::ChannelClosed)
        }
    }

    #[tokio::test]
    async fn test_attached_subscriber_receives_events() {
        let bus = EventBus::new(16);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = bus.attach(Arc::new(ForwardingSubscriber { tx }));

        let event = TokenEvent::transfer("alice".into(), "bob".into(), Amount::new(95));
        bus.publish(event.clone());

        let received = rx.recv().await.unwrap();
        assert_eq!(received.event, event);

        // dropping the last sender closes the channel and ends the task
        drop(bus);
        handle.await.unwrap();
    }
}
