//! # Identifier Entities
//!
//! Product identifiers and the timestamp convention used across the
//! workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unix timestamp in seconds.
///
/// The core never reads a clock; mutation operations take the timestamp as
/// an explicit argument so hosts control time (and tests are deterministic).
pub type Timestamp = u64;

/// Caller-supplied unique key for a registered product.
///
/// Id `0` is reserved as the "absent" sentinel and can never be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct ProductId(pub u64);

impl ProductId {
    /// The reserved sentinel id. Never names a live product.
    pub const ZERO: ProductId = ProductId(0);

    /// Creates a product id from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        ProductId(value)
    }

    /// Returns the numeric value of this id.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns `true` if this is the reserved sentinel id `0`.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        ProductId(value)
    }
}
