//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of the outbound ports. The registry core only
//! sees the port traits; hosts pick the adapter.

pub mod bus_notifier;

pub use bus_notifier::*;
