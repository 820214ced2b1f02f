//! # Domain Layer (Inner Hexagon)
//!
//! Pure provenance logic: the registry, the ledger, the ownership gate, and
//! the read-only authentication view. NO I/O, NO async, NO locking, NO
//! logging. The service shell owns those concerns.
//!
//! Dependencies point INWARD only: ports and adapters depend on this
//! module, never the other way around.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod ledger;
pub mod ownership;
pub mod queries;
pub mod registry;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use ledger::*;
pub use ownership::*;
pub use queries::*;
pub use registry::*;
