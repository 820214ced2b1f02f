//! # Core Domain Entities
//!
//! The product record, the custody step, and the registry configuration.

use custody_types::{Principal, ProductId, Timestamp};
use serde::{Deserialize, Serialize};

/// A registered product.
///
/// Immutable after registration except for `current_owner`, which changes
/// through owner-gated operations only. The original issuer stays recorded
/// in `manufacturer` across any number of transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Caller-supplied unique id. Never `0`.
    pub id: ProductId,
    /// Human-readable product name.
    pub name: String,
    /// Name of the issuing company, compared byte-exactly on
    /// authentication.
    pub company_name: String,
    /// The principal that registered the product. Never changes.
    pub manufacturer: Principal,
    /// The principal currently in control of the product.
    pub current_owner: Principal,
    /// When the product was registered (unix seconds, host-supplied).
    pub created_at: Timestamp,
}

impl Product {
    /// Create a freshly registered product.
    ///
    /// The manufacturer starts as the current owner.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: String,
        company_name: String,
        manufacturer: Principal,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            company_name,
            manufacturer,
            current_owner: manufacturer,
            created_at,
        }
    }
}

/// One entry in a product's custody trail.
///
/// Steps are append-only; once recorded they are never mutated, reordered,
/// or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStep {
    /// Status label at this step (e.g. "Manufactured", "Shipped").
    pub status: String,
    /// Where the step was recorded.
    pub location: String,
    /// The principal that performed the step.
    pub stakeholder: Principal,
    /// When the step was recorded (unix seconds, host-supplied).
    pub recorded_at: Timestamp,
}

impl ProductStep {
    /// Create a custody step.
    #[must_use]
    pub fn new(
        status: String,
        location: String,
        stakeholder: Principal,
        recorded_at: Timestamp,
    ) -> Self {
        Self {
            status,
            location,
            stakeholder,
            recorded_at,
        }
    }
}

/// Registry configuration.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Status label written into the first custody step of every
    /// registration.
    pub initial_status: String,
    /// Initial capacity of each product's step vector.
    pub history_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_status: "Manufactured".to_string(),
            history_capacity: 8,
        }
    }
}
