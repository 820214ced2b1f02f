//! # Custody Registry - Product Provenance Subsystem
//!
//! Tracks discrete physical products through a supply chain: each product
//! is registered once by its manufacturer, accrues an ordered, immutable
//! trail of status/location steps, and changes hands only under control of
//! its current owner.
//!
//! ## Purpose
//!
//! Two consumer-facing guarantees fall out of the trail: authenticity (a
//! product's custody chain exists and was opened by the claimed company)
//! and traceability (every status change is attributable to the principal
//! that held the product at the time).
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Product ids are unique; id 0 is reserved | `domain/registry.rs` - `ProductRegistry::insert()` |
//! | Only the current owner mutates a product | `domain/invariants.rs` - `invariant_owner_gate()` |
//! | Custody trails are append-only and ordered | `domain/ledger.rs` - `ProvenanceLedger::append()` |
//! | Registration writes record + first step atomically | `domain/ownership.rs` - `OwnershipController::register()` |
//! | Rejected operations mutate nothing | all checks precede all writes |
//!
//! ## Concurrency
//!
//! The service serializes mutations behind a write lock and answers reads
//! under the shared lock; notifications fire only after the write lock is
//! released. See `service.rs`.
//!
//! ## Identity and Time
//!
//! Callers are [`custody_types::Principal`]s authenticated by the hosting
//! environment, and every mutation takes its timestamp as an argument. The
//! core never inspects ambient authority and never reads a clock.
//!
//! ## Usage Example
//!
//! ```
//! use custody_registry::prelude::*;
//! use custody_types::{Principal, ProductId};
//!
//! let service = ProvenanceService::new(NoopNotifier);
//! let maker = Principal::new([1u8; 20]);
//!
//! service.register_product(
//!     ProductId::new(1), "Serum N7", "Helix Labs", "Plant 3", maker, 1_700_000_000,
//! )?;
//! service.update_status(
//!     ProductId::new(1), "Shipped", "Rotterdam", maker, 1_700_086_400,
//! )?;
//!
//! let trail = service.product_history(ProductId::new(1))?;
//! assert_eq!(trail.len(), 2);
//! assert!(service.authenticate_company_product(ProductId::new(1), "Helix Labs")?);
//! # Ok::<(), custody_registry::domain::RegistryError>(())
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{Product, ProductStep, RegistryConfig};

    // Domain structures
    pub use crate::domain::ledger::ProvenanceLedger;
    pub use crate::domain::ownership::OwnershipController;
    pub use crate::domain::queries::AuthenticationQuery;
    pub use crate::domain::registry::ProductRegistry;

    // Invariants
    pub use crate::domain::invariants::{
        invariant_manufacturer_recorded, invariant_owner_gate, invariant_registrable_id,
    };

    // Errors
    pub use crate::domain::errors::RegistryError;

    // Ports
    pub use crate::ports::inbound::ProvenanceApi;
    pub use crate::ports::outbound::{
        NoopNotifier, ProvenanceNotifier, RecordedNotification, RecordingNotifier,
        SystemTimeSource, TimeSource,
    };

    // Adapters
    pub use crate::adapters::BusNotifier;

    // Service
    pub use crate::service::{create_test_service, ProvenanceService, ServiceStats};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
