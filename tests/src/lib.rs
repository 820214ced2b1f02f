//! # CustodyChain Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-crate custody flows over the event bus
//!     └── flows.rs
//!
//! tests/benches/
//! └── registry_benchmarks.rs   # Registry and bus hot-path benchmarks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p custody-tests
//!
//! # By category
//! cargo test -p custody-tests integration::
//!
//! # With service logs
//! RUST_LOG=debug cargo test -p custody-tests -- --nocapture
//!
//! # Benchmarks
//! cargo bench -p custody-tests
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]
