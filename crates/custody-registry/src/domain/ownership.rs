//! # Ownership Controller
//!
//! The single-writer aggregate every mutation goes through. Owns the
//! registry and the ledger as one unit so a compound mutation (record plus
//! custody step) is either fully applied or not applied at all.

use custody_types::{Principal, ProductId, Timestamp};

use super::entities::{Product, ProductStep, RegistryConfig};
use super::errors::RegistryError;
use super::invariants::invariant_owner_gate;
use super::ledger::ProvenanceLedger;
use super::queries::AuthenticationQuery;
use super::registry::ProductRegistry;

/// Registry and ledger under one mutation gate.
///
/// All checks run before any write, so a rejected operation leaves both
/// structures untouched.
#[derive(Debug)]
pub struct OwnershipController {
    registry: ProductRegistry,
    ledger: ProvenanceLedger,
    config: RegistryConfig,
}

impl OwnershipController {
    /// Create a controller with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a controller with custom configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            registry: ProductRegistry::new(),
            ledger: ProvenanceLedger::with_step_capacity(config.history_capacity),
            config,
        }
    }

    /// Register a product under the caller's identity.
    ///
    /// Creates the record with the caller as manufacturer and owner, and
    /// appends the first custody step (configured initial status, given
    /// location) in the same mutation.
    ///
    /// # Errors
    ///
    /// [`RegistryError::AlreadyExists`] if the id is taken or reserved.
    pub fn register(
        &mut self,
        id: ProductId,
        name: String,
        company_name: String,
        location: String,
        caller: Principal,
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        self.registry
            .insert(Product::new(id, name, company_name, caller, now))?;

        // Insert succeeded, so the id was fresh; the first step cannot fail.
        self.ledger.append(
            id,
            ProductStep::new(self.config.initial_status.clone(), location, caller, now),
        );
        Ok(())
    }

    /// Record a new status and location for a product.
    ///
    /// Owner-gated. Appends a custody step under the caller's identity.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an unknown id,
    /// [`RegistryError::NotOwner`] if the caller does not hold the product.
    pub fn update_status(
        &mut self,
        id: ProductId,
        status: String,
        location: String,
        caller: Principal,
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        let product = self
            .registry
            .get_mut(id)
            .ok_or(RegistryError::NotFound { id })?;
        invariant_owner_gate(product, caller)?;

        // Idempotent: the gate already proved caller == current_owner.
        product.current_owner = caller;

        self.ledger
            .append(id, ProductStep::new(status, location, caller, now));
        Ok(())
    }

    /// Hand a product to a new owner.
    ///
    /// Owner-gated. Records no custody step, and the target is not
    /// validated: transfers to the current owner or to the zero principal
    /// are accepted silently.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an unknown id,
    /// [`RegistryError::NotOwner`] if the caller does not hold the product.
    pub fn transfer_ownership(
        &mut self,
        id: ProductId,
        new_owner: Principal,
        caller: Principal,
    ) -> Result<(), RegistryError> {
        let product = self
            .registry
            .get_mut(id)
            .ok_or(RegistryError::NotFound { id })?;
        invariant_owner_gate(product, caller)?;

        product.current_owner = new_owner;
        Ok(())
    }

    /// Look up a product record.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an unknown id.
    pub fn product(&self, id: ProductId) -> Result<&Product, RegistryError> {
        self.registry.get(id).ok_or(RegistryError::NotFound { id })
    }

    /// Full custody trail, oldest first. Empty for unknown ids.
    #[must_use]
    pub fn history(&self, id: ProductId) -> &[ProductStep] {
        self.ledger.history(id)
    }

    /// Most recent custody step.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an unregistered id,
    /// [`RegistryError::NoHistory`] if the trail is somehow empty.
    pub fn last_step(&self, id: ProductId) -> Result<&ProductStep, RegistryError> {
        if !self.registry.contains(id) {
            return Err(RegistryError::NotFound { id });
        }
        self.ledger.last_step(id)
    }

    /// Read-only authentication view over the registry and ledger.
    #[must_use]
    pub fn query(&self) -> AuthenticationQuery<'_> {
        AuthenticationQuery::new(&self.registry, &self.ledger)
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &ProductRegistry {
        &self.registry
    }

    /// The underlying ledger.
    #[must_use]
    pub fn ledger(&self) -> &ProvenanceLedger {
        &self.ledger
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl Default for OwnershipController {
    fn default() -> Self {
        Self::new()
    }
}
