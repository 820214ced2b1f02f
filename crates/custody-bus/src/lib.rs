//! # Custody Bus - Provenance Notification Fan-Out
//!
//! Carries registry notifications to whatever the hosting environment wires
//! up: audit sinks, webhooks, UI pushes. The registry core depends only on
//! the abstract publish capability; this crate supplies the in-memory
//! implementation.
//!
//! ## Delivery Contract
//!
//! - **After the fact**: an event is published only once the mutation it
//!   describes has been applied. A subscriber that reads the registry on
//!   receipt observes the new state.
//! - **Fire-and-forget**: publishing never fails and never blocks. Zero
//!   subscribers is not an error; a slow subscriber lags and skips, it does
//!   not stall the publisher.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │   Registry   │                    │     Host     │
//! │   Service    │    publish()       │  Subscriber  │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │ Custody Bus  │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, ProvenanceEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before older ones are dropped.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;
