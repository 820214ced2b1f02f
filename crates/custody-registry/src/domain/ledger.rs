//! # Provenance Ledger
//!
//! Append-only custody trails, one per product. Insertion order is the
//! source of truth: the first step is the registration, the last step is
//! the current status.

use std::collections::HashMap;

use custody_types::ProductId;

use super::entities::ProductStep;
use super::errors::RegistryError;

/// Default initial capacity of a product's step vector.
pub const DEFAULT_STEP_CAPACITY: usize = 8;

/// The custody trails of all registered products.
///
/// The ledger itself accepts appends for any id; the ownership controller
/// guarantees appends only happen for registered products.
#[derive(Debug)]
pub struct ProvenanceLedger {
    steps: HashMap<ProductId, Vec<ProductStep>>,
    step_capacity: usize,
}

impl ProvenanceLedger {
    /// Create an empty ledger with the default per-product capacity hint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_step_capacity(DEFAULT_STEP_CAPACITY)
    }

    /// Create an empty ledger with a custom per-product capacity hint.
    #[must_use]
    pub fn with_step_capacity(step_capacity: usize) -> Self {
        Self {
            steps: HashMap::new(),
            step_capacity,
        }
    }

    /// Append a step to a product's trail.
    ///
    /// Steps are never mutated, reordered, or removed afterwards.
    pub fn append(&mut self, id: ProductId, step: ProductStep) {
        self.steps
            .entry(id)
            .or_insert_with(|| Vec::with_capacity(self.step_capacity))
            .push(step);
    }

    /// Full trail for a product, oldest first.
    ///
    /// Unknown ids yield an empty slice, indistinguishable from "no steps".
    #[must_use]
    pub fn history(&self, id: ProductId) -> &[ProductStep] {
        self.steps.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Most recent step for a product. O(1).
    ///
    /// # Errors
    ///
    /// [`RegistryError::NoHistory`] if the trail is empty or the id is
    /// unknown.
    pub fn last_step(&self, id: ProductId) -> Result<&ProductStep, RegistryError> {
        self.steps
            .get(&id)
            .and_then(|steps| steps.last())
            .ok_or(RegistryError::NoHistory { id })
    }

    /// Number of steps recorded for a product.
    #[must_use]
    pub fn step_count(&self, id: ProductId) -> usize {
        self.steps.get(&id).map_or(0, Vec::len)
    }
}

impl Default for ProvenanceLedger {
    fn default() -> Self {
        Self::new()
    }
}
