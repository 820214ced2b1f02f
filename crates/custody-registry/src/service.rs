//! # Provenance Service
//!
//! The subsystem shell around the ownership controller: one write lock for
//! mutations, shared read access for queries, notification dispatch after
//! the fact, and operation statistics.
//!
//! ## Concurrency
//!
//! - Mutations take the write lock for the whole compound mutation, so
//!   their effects are never partially visible.
//! - Reads take the read lock and run concurrently with each other.
//! - Notifications fire after the write lock is released; a subscriber
//!   that reads on receipt observes the completed mutation.

use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use custody_types::{Principal, ProductId, Timestamp};

use crate::domain::{OwnershipController, Product, ProductStep, RegistryConfig, RegistryError};
use crate::ports::inbound::ProvenanceApi;
use crate::ports::outbound::{NoopNotifier, ProvenanceNotifier};

/// Statistics for the provenance service.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Successful registrations.
    pub products_registered: u64,
    /// Successful status updates.
    pub status_updates: u64,
    /// Successful ownership transfers.
    pub ownership_transfers: u64,
    /// Registrations rejected (duplicate or reserved id).
    pub rejected_registrations: u64,
    /// Status updates rejected (unknown id or wrong owner).
    pub rejected_updates: u64,
    /// Transfers rejected (unknown id or wrong owner).
    pub rejected_transfers: u64,
}

/// The main provenance service.
///
/// This service:
/// 1. Serializes mutations through the ownership controller
/// 2. Answers reads concurrently
/// 3. Dispatches notifications once a mutation is durably applied
/// 4. Maintains operation statistics
pub struct ProvenanceService<N: ProvenanceNotifier> {
    /// Registry configuration.
    config: RegistryConfig,
    /// The registry/ledger aggregate, behind the per-registry lock.
    controller: RwLock<OwnershipController>,
    /// Notification sink.
    notifier: Arc<N>,
    /// Service statistics.
    stats: RwLock<ServiceStats>,
}

impl<N: ProvenanceNotifier> ProvenanceService<N> {
    /// Create a service with default configuration.
    pub fn new(notifier: N) -> Self {
        Self::with_config(notifier, RegistryConfig::default())
    }

    /// Create a service with custom configuration.
    pub fn with_config(notifier: N, config: RegistryConfig) -> Self {
        Self {
            controller: RwLock::new(OwnershipController::with_config(config.clone())),
            notifier: Arc::new(notifier),
            stats: RwLock::new(ServiceStats::default()),
            config,
        }
    }

    /// Get current service statistics.
    #[must_use]
    pub fn stats(&self) -> ServiceStats {
        self.stats
            .read()
            .map(|stats| stats.clone())
            .unwrap_or_default()
    }

    /// The configuration this service was built with.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The wired notification sink.
    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn record(&self, update: impl FnOnce(&mut ServiceStats)) {
        if let Ok(mut stats) = self.stats.write() {
            update(&mut stats);
        }
    }
}

impl<N: ProvenanceNotifier> ProvenanceApi for ProvenanceService<N> {
    fn register_product(
        &self,
        id: ProductId,
        name: &str,
        company_name: &str,
        location: &str,
        caller: Principal,
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        let result = {
            let mut controller = self
                .controller
                .write()
                .map_err(|_| RegistryError::LockPoisoned)?;
            controller.register(
                id,
                name.to_owned(),
                company_name.to_owned(),
                location.to_owned(),
                caller,
                now,
            )
        };

        match result {
            Ok(()) => {
                self.record(|stats| stats.products_registered += 1);
                info!(id = %id, caller = %caller, company = company_name, "Product registered");
                // Lock released above; subscribers reading now see the product
                self.notifier.product_added(id, name, company_name, caller);
                Ok(())
            }
            Err(e) => {
                self.record(|stats| stats.rejected_registrations += 1);
                warn!(id = %id, caller = %caller, error = %e, "Registration rejected");
                Err(e)
            }
        }
    }

    fn update_status(
        &self,
        id: ProductId,
        status: &str,
        location: &str,
        caller: Principal,
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        let result = {
            let mut controller = self
                .controller
                .write()
                .map_err(|_| RegistryError::LockPoisoned)?;
            controller.update_status(id, status.to_owned(), location.to_owned(), caller, now)
        };

        match result {
            Ok(()) => {
                self.record(|stats| stats.status_updates += 1);
                info!(id = %id, caller = %caller, status = status, "Status updated");
                self.notifier.status_updated(id, status, location, caller);
                Ok(())
            }
            Err(e) => {
                self.record(|stats| stats.rejected_updates += 1);
                warn!(id = %id, caller = %caller, error = %e, "Status update rejected");
                Err(e)
            }
        }
    }

    fn transfer_ownership(
        &self,
        id: ProductId,
        new_owner: Principal,
        caller: Principal,
    ) -> Result<(), RegistryError> {
        let result = {
            let mut controller = self
                .controller
                .write()
                .map_err(|_| RegistryError::LockPoisoned)?;
            controller.transfer_ownership(id, new_owner, caller)
        };

        match result {
            Ok(()) => {
                self.record(|stats| stats.ownership_transfers += 1);
                // Transfers publish no notification
                info!(id = %id, from = %caller, to = %new_owner, "Ownership transferred");
                Ok(())
            }
            Err(e) => {
                self.record(|stats| stats.rejected_transfers += 1);
                warn!(id = %id, caller = %caller, error = %e, "Transfer rejected");
                Err(e)
            }
        }
    }

    fn product_details(&self, id: ProductId) -> Result<Product, RegistryError> {
        let controller = self
            .controller
            .read()
            .map_err(|_| RegistryError::LockPoisoned)?;
        controller.product(id).cloned()
    }

    fn product_history(&self, id: ProductId) -> Result<Vec<ProductStep>, RegistryError> {
        let controller = self
            .controller
            .read()
            .map_err(|_| RegistryError::LockPoisoned)?;
        Ok(controller.history(id).to_vec())
    }

    fn last_product_status(&self, id: ProductId) -> Result<ProductStep, RegistryError> {
        let controller = self
            .controller
            .read()
            .map_err(|_| RegistryError::LockPoisoned)?;
        controller.last_step(id).cloned()
    }

    fn authenticate_product(&self, id: ProductId) -> Result<Vec<ProductStep>, RegistryError> {
        let controller = self
            .controller
            .read()
            .map_err(|_| RegistryError::LockPoisoned)?;
        Ok(controller.query().authenticate_product(id).to_vec())
    }

    fn authenticate_company_product(
        &self,
        id: ProductId,
        claimed_company: &str,
    ) -> Result<bool, RegistryError> {
        let controller = self
            .controller
            .read()
            .map_err(|_| RegistryError::LockPoisoned)?;
        controller.query().authenticate_company_product(id, claimed_company)
    }

    fn product_count(&self) -> Result<usize, RegistryError> {
        let controller = self
            .controller
            .read()
            .map_err(|_| RegistryError::LockPoisoned)?;
        Ok(controller.registry().len())
    }
}

/// Create a default service with a discarding notifier (for testing).
#[must_use]
pub fn create_test_service() -> ProvenanceService<NoopNotifier> {
    ProvenanceService::new(NoopNotifier)
}

// =============================================================================
// TESTS
// =============================================================================
