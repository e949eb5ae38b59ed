//! Application context - wires the ledger to the event bus

use std::sync::Arc;

use async_trait::async_trait;
use cinder_bus::{BusError, BusEvent, EventBus, EventSubscriber};
use cinder_core::AccountId;
use cinder_ledger::{Ledger, TokenEvent};
use tokio::task::JoinHandle;

/// Bus buffer size; the CLI drives one operation at a time
const BUS_CAPACITY: usize = 64;

/// Application context - one ledger instance wired to one event bus
pub struct AppContext {
    pub ledger: Ledger,
    pub bus: EventBus,
    deployer: AccountId,
}

impl AppContext {
    /// Create a fresh ledger with the bus attached as its sink
    pub fn new(name: &str, symbol: &str, deployer: &str) -> Self {
        let bus = EventBus::new(BUS_CAPACITY);
        let deployer = AccountId::new(deployer);
        let mut ledger = Ledger::new(name, symbol, deployer.clone());
        ledger.attach_sink(Arc::new(bus.clone()));

        Self {
            ledger,
            bus,
            deployer,
        }
    }

    /// The account credited with the genesis supply
    pub fn deployer(&self) -> &AccountId {
        &self.deployer
    }

    /// Attach the console event printer and return its task handle.
    ///
    /// Await the handle after dropping the context for a clean flush:
    /// the channel closes once the ledger and bus are gone.
    pub fn attach_printer(&self) -> JoinHandle<()> {
        let printer = EventPrinter {
            symbol: self.ledger.symbol().to_string(),
        };
        self.bus.attach(Arc::new(printer))
    }
}

/// Subscriber that prints every bus event to the console
struct EventPrinter {
    symbol: String,
}

#[async_trait]
impl EventSubscriber for EventPrinter {
    fn name(&self) -> &str {
        "console"
    }

    async fn handle(&self, event: &BusEvent) -> Result<(), BusError> {
        match &event.event {
            TokenEvent::Transfer { from, to, amount } => {
                println!("📣 Transfer {from} -> {to}: {amount} {} (net)", self.symbol);
            }
            TokenEvent::Approval {
                owner,
                spender,
                amount,
            } => {
                println!("📣 Approval {owner} -> {spender}: {amount} {}", self.symbol);
            }
        }
        Ok(())
    }
}
