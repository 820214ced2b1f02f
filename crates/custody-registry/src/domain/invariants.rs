//! # Domain Invariants
//!
//! Business rules enforced by the registry, expressed as standalone checks
//! so the mutation paths and the test suite share one definition.

use super::entities::{Product, ProductStep};
use super::errors::RegistryError;
use custody_types::{Principal, ProductId};

/// Invariant: a registrable id is non-reserved.
///
/// Id `0` is the "absent" sentinel; it is permanently taken and can never
/// name a live product.
pub fn invariant_registrable_id(id: ProductId) -> Result<(), RegistryError> {
    if id.is_reserved() {
        return Err(RegistryError::AlreadyExists { id });
    }
    Ok(())
}

/// Invariant: only the current owner mutates a product.
///
/// Applies to status updates and ownership transfers alike. Registration is
/// exempt (the product does not exist yet).
pub fn invariant_owner_gate(product: &Product, caller: Principal) -> Result<(), RegistryError> {
    if product.current_owner != caller {
        return Err(RegistryError::NotOwner {
            id: product.id,
            caller,
        });
    }
    Ok(())
}

/// Invariant: the first custody step was recorded by the manufacturer.
///
/// Holds for every registered product because registration writes the first
/// step in the same compound mutation that creates the record.
#[must_use]
pub fn invariant_manufacturer_recorded(product: &Product, first_step: &ProductStep) -> bool {
    first_step.stakeholder == product.manufacturer
}
