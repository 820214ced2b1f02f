//! # Inbound Ports
//!
//! The driving API of the registry subsystem. Hosts (RPC layers, CLIs,
//! embedding services) call these operations; the service implements them.
//!
//! Every mutation takes the caller's [`Principal`] and the current time as
//! explicit arguments. The registry never inspects transport state and
//! never reads a clock on its own, so hosts stay in control of identity
//! and time.

use custody_types::{Principal, ProductId, Timestamp};

use crate::domain::{Product, ProductStep, RegistryError};

/// The complete operation surface of the registry subsystem.
///
/// Mutations are serialized per registry; reads may run concurrently. All
/// methods are synchronous and deterministic: same state plus same inputs
/// yields the same outcome.
pub trait ProvenanceApi: Send + Sync {
    /// Register a product under the caller's identity.
    ///
    /// On success the caller becomes manufacturer and first owner, and the
    /// custody trail opens with one step at `location`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::AlreadyExists`] if the id is taken or reserved.
    fn register_product(
        &self,
        id: ProductId,
        name: &str,
        company_name: &str,
        location: &str,
        caller: Principal,
        now: Timestamp,
    ) -> Result<(), RegistryError>;

    /// Record a new status and location for a product the caller owns.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an unknown id,
    /// [`RegistryError::NotOwner`] if the caller is not the current owner.
    fn update_status(
        &self,
        id: ProductId,
        status: &str,
        location: &str,
        caller: Principal,
        now: Timestamp,
    ) -> Result<(), RegistryError>;

    /// Hand a product the caller owns to a new owner.
    ///
    /// Records no custody step and does not validate the target; a
    /// transfer to the current owner or the zero principal succeeds
    /// silently.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an unknown id,
    /// [`RegistryError::NotOwner`] if the caller is not the current owner.
    fn transfer_ownership(
        &self,
        id: ProductId,
        new_owner: Principal,
        caller: Principal,
    ) -> Result<(), RegistryError>;

    /// Fetch a product record.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an unknown id.
    fn product_details(&self, id: ProductId) -> Result<Product, RegistryError>;

    /// Fetch a product's full custody trail, oldest first.
    ///
    /// Unknown ids yield `Ok` with an empty trail.
    ///
    /// # Errors
    ///
    /// Infrastructure failures only ([`RegistryError::LockPoisoned`]).
    fn product_history(&self, id: ProductId) -> Result<Vec<ProductStep>, RegistryError>;

    /// Fetch the most recent custody step.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an unregistered id,
    /// [`RegistryError::NoHistory`] if the trail is somehow empty.
    fn last_product_status(&self, id: ProductId) -> Result<ProductStep, RegistryError>;

    /// Authenticate a product by returning its custody trail.
    ///
    /// Same data contract as [`ProvenanceApi::product_history`]; exposed as
    /// its own operation so hosts can authorize it separately.
    ///
    /// # Errors
    ///
    /// Infrastructure failures only ([`RegistryError::LockPoisoned`]).
    fn authenticate_product(&self, id: ProductId) -> Result<Vec<ProductStep>, RegistryError>;

    /// Verify that a product was issued by the claimed company.
    ///
    /// Byte-exact, case-sensitive comparison.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an unknown id, never a silent
    /// `false`.
    fn authenticate_company_product(
        &self,
        id: ProductId,
        claimed_company: &str,
    ) -> Result<bool, RegistryError>;

    /// Number of registered products.
    ///
    /// # Errors
    ///
    /// Infrastructure failures only ([`RegistryError::LockPoisoned`]).
    fn product_count(&self) -> Result<usize, RegistryError>;
}
