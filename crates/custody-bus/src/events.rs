//! # Provenance Events
//!
//! Defines the notifications that flow out of the registry, and the filter
//! machinery subscribers use to select the slice they care about.

use custody_types::{Principal, ProductId};
use serde::{Deserialize, Serialize};

/// All notifications published on the custody bus.
///
/// Each variant corresponds to exactly one successful registry mutation and
/// carries the fields a downstream consumer needs without a follow-up read.
/// Ownership transfers deliberately publish nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProvenanceEvent {
    /// A product was registered by its manufacturer.
    ProductAdded {
        /// The new product's id.
        id: ProductId,
        /// Human-readable product name.
        name: String,
        /// The issuing company's name, as registered.
        company_name: String,
        /// The principal that performed the registration.
        manufacturer: Principal,
    },

    /// A product's status was updated by its current owner.
    ProductStatusUpdated {
        /// The product's id.
        id: ProductId,
        /// The new status label.
        status: String,
        /// The location recorded with the update.
        location: String,
        /// The owner that performed the update.
        updated_by: Principal,
    },
}

impl ProvenanceEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::ProductAdded { .. } => EventTopic::Registry,
            Self::ProductStatusUpdated { .. } => EventTopic::Custody,
        }
    }

    /// Get the product this event concerns.
    #[must_use]
    pub fn product_id(&self) -> ProductId {
        match self {
            Self::ProductAdded { id, .. } | Self::ProductStatusUpdated { id, .. } => *id,
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Registration events (`ProductAdded`).
    Registry,
    /// Custody-trail events (`ProductStatusUpdated`).
    Custody,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
///
/// Both axes are conjunctive: an event must match the topic list and the
/// product list. An empty axis matches everything.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Products to include. Empty means all products.
    pub product_ids: Vec<ProductId>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            product_ids: Vec::new(),
        }
    }

    /// Create a filter for events concerning specific products.
    #[must_use]
    pub fn products(product_ids: Vec<ProductId>) -> Self {
        Self {
            topics: Vec::new(),
            product_ids,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &ProvenanceEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let product_match =
            self.product_ids.is_empty() || self.product_ids.contains(&event.product_id());

        topic_match && product_match
    }
}
