//! # Bus Notifier Adapter
//!
//! Bridges the [`ProvenanceNotifier`] port onto the custody bus, turning
//! port calls into [`ProvenanceEvent`]s.

use std::sync::Arc;

use custody_bus::{EventPublisher, InMemoryEventBus, ProvenanceEvent};
use custody_types::{Principal, ProductId};

use crate::ports::outbound::ProvenanceNotifier;

/// Notifier that publishes events on a custody bus.
///
/// Publishing is fire-and-forget; the subscriber count returned by the bus
/// is ignored here (the bus logs deliveries itself).
pub struct BusNotifier<P: EventPublisher> {
    bus: Arc<P>,
}

impl<P: EventPublisher> BusNotifier<P> {
    /// Create a notifier over an existing bus.
    pub fn new(bus: Arc<P>) -> Self {
        Self { bus }
    }

    /// A shared handle on the underlying bus, for subscribing.
    #[must_use]
    pub fn bus(&self) -> Arc<P> {
        Arc::clone(&self.bus)
    }
}

impl BusNotifier<InMemoryEventBus> {
    /// Create a notifier over a fresh in-memory bus.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryEventBus::new()))
    }
}

impl<P: EventPublisher> ProvenanceNotifier for BusNotifier<P> {
    fn product_added(
        &self,
        id: ProductId,
        name: &str,
        company_name: &str,
        manufacturer: Principal,
    ) {
        self.bus.publish(ProvenanceEvent::ProductAdded {
            id,
            name: name.to_owned(),
            company_name: company_name.to_owned(),
            manufacturer,
        });
    }

    fn status_updated(&self, id: ProductId, status: &str, location: &str, updated_by: Principal) {
        self.bus.publish(ProvenanceEvent::ProductStatusUpdated {
            id,
            status: status.to_owned(),
            location: location.to_owned(),
            updated_by,
        });
    }
}
