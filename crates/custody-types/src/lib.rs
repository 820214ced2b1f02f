//! # Custody Types Crate
//!
//! Vocabulary types shared by every CustodyChain crate: caller identity,
//! product identifiers, and timestamps.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate identifier types are
//!   defined here.
//! - **Opaque Identity**: A [`Principal`] carries no cryptographic meaning
//!   inside the core; the hosting environment authenticates callers and
//!   hands the core an already-trusted value.
//! - **Caller-Supplied Keys**: A [`ProductId`] is chosen by the registrant,
//!   not generated; id `0` is reserved and never names a live product.

pub mod entities;
pub mod identity;

pub use entities::{ProductId, Timestamp};
pub use identity::Principal;
