//! # Product Registry
//!
//! The identity map from product id to product record. Enforces id
//! uniqueness; everything else about a record is managed by the ownership
//! controller.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use custody_types::ProductId;

use super::entities::Product;
use super::errors::RegistryError;
use super::invariants::invariant_registrable_id;

/// The set of registered products, keyed by id.
#[derive(Debug, Default)]
pub struct ProductRegistry {
    products: HashMap<ProductId, Product>,
}

impl ProductRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// [`RegistryError::AlreadyExists`] if the id is taken or reserved. The
    /// registry is unchanged on error.
    pub fn insert(&mut self, product: Product) -> Result<(), RegistryError> {
        invariant_registrable_id(product.id)?;

        match self.products.entry(product.id) {
            Entry::Occupied(_) => Err(RegistryError::AlreadyExists { id: product.id }),
            Entry::Vacant(slot) => {
                slot.insert(product);
                Ok(())
            }
        }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Mutable lookup, for the ownership controller only.
    pub(crate) fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.get_mut(&id)
    }

    /// Check whether an id is registered.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    /// Number of registered products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All registered ids, in ascending order.
    ///
    /// The backing map cannot enumerate deterministically, so this sorts.
    #[must_use]
    pub fn product_ids(&self) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = self.products.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
