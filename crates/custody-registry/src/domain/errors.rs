//! # Registry Errors
//!
//! The closed set of deterministic rejections. A rejected operation leaves
//! no partial mutation behind, and retrying without changing inputs yields
//! the same error.

use custody_types::{Principal, ProductId};
use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The id is already registered, or is the reserved id `0`.
    #[error("Product already exists: id {id}")]
    AlreadyExists {
        /// The conflicting id.
        id: ProductId,
    },

    /// No product is registered under this id.
    #[error("Product not found: id {id}")]
    NotFound {
        /// The unknown id.
        id: ProductId,
    },

    /// The caller is not the product's current owner.
    #[error("Caller {caller} is not the current owner of product {id}")]
    NotOwner {
        /// The product whose mutation was attempted.
        id: ProductId,
        /// The rejected caller.
        caller: Principal,
    },

    /// The product has no recorded custody steps.
    ///
    /// Registration writes the first step in the same mutation that creates
    /// the record, so last-step reads on registered products never see this.
    #[error("Product {id} has no recorded history")]
    NoHistory {
        /// The product with the empty trail.
        id: ProductId,
    },

    /// A prior panic poisoned the registry lock.
    #[error("Registry lock poisoned")]
    LockPoisoned,
}
