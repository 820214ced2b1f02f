//! # Authentication Queries
//!
//! Read-only verification view over the registry and ledger. Holds no state
//! of its own and never mutates; any number of these can live alongside
//! each other.

use custody_types::ProductId;

use super::entities::ProductStep;
use super::errors::RegistryError;
use super::ledger::ProvenanceLedger;
use super::registry::ProductRegistry;

/// Borrowed read-only view for authenticity checks.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticationQuery<'a> {
    registry: &'a ProductRegistry,
    ledger: &'a ProvenanceLedger,
}

impl<'a> AuthenticationQuery<'a> {
    /// Create a view over a registry/ledger pair.
    #[must_use]
    pub fn new(registry: &'a ProductRegistry, ledger: &'a ProvenanceLedger) -> Self {
        Self { registry, ledger }
    }

    /// The product's custody trail, oldest first.
    ///
    /// An unknown id yields an empty trail; a caller that needs to
    /// distinguish "unregistered" from "no steps" checks the registry.
    #[must_use]
    pub fn authenticate_product(&self, id: ProductId) -> &'a [ProductStep] {
        self.ledger.history(id)
    }

    /// Verify that a product was issued by the claimed company.
    ///
    /// The comparison is byte-exact and case-sensitive against the stored
    /// company name.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an unknown id, so the caller can
    /// tell "wrong company" from "no such product".
    pub fn authenticate_company_product(
        &self,
        id: ProductId,
        claimed_company: &str,
    ) -> Result<bool, RegistryError> {
        let product = self.registry.get(id).ok_or(RegistryError::NotFound { id })?;
        Ok(product.company_name == claimed_company)
    }
}
