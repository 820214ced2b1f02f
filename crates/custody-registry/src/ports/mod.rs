//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the registry subsystem. These are the interfaces
//! between the domain and the outside world.
//!
//! - **Driving Ports (Inbound)**: [`ProvenanceApi`]
//! - **Driven Ports (Outbound)**: [`ProvenanceNotifier`], [`TimeSource`]
//!
//! No business logic lives here; reference adapters for the outbound ports
//! sit next to their traits so tests and simple hosts can use them
//! directly.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
