//! # Caller Identity
//!
//! Defines [`Principal`], the opaque identity under which every mutation is
//! performed. The hosting environment (RPC layer, CLI, embedding service)
//! authenticates callers by whatever means it chooses and passes the
//! resulting principal in explicitly; the core only ever compares principals
//! for equality and stores them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque, unforgeable caller identity.
///
/// 20 bytes wide, compared bytewise. The core never derives, validates, or
/// forges a principal; it records the ones it is given and gates mutations
/// on equality with a stored owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Principal(pub [u8; 20]);

impl Principal {
    /// The all-zero principal.
    ///
    /// Valid as a transfer target (transfers are not validated), but no
    /// authenticated caller should ever present it.
    pub const ZERO: Principal = Principal([0u8; 20]);

    /// Creates a principal from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Principal(bytes)
    }

    /// Returns the raw bytes of this principal.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns `true` for the all-zero principal.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 20]> for Principal {
    fn from(bytes: [u8; 20]) -> Self {
        Principal(bytes)
    }
}
