//! # Outbound Ports
//!
//! Driven-side traits the registry calls out through, plus the reference
//! adapters simple hosts and the test suite wire in.

use std::sync::Mutex;

use custody_types::{Principal, ProductId, Timestamp};

/// Abstract notification sink.
///
/// The service calls these after a mutation has been fully applied and its
/// lock released; a notifier that reacts by reading the registry observes
/// the new state. Fire-and-forget: no return value, and implementations
/// must not block the caller.
///
/// Ownership transfers notify nobody.
pub trait ProvenanceNotifier: Send + Sync {
    /// A product was registered.
    fn product_added(
        &self,
        id: ProductId,
        name: &str,
        company_name: &str,
        manufacturer: Principal,
    );

    /// A product's status was updated by its current owner.
    fn status_updated(&self, id: ProductId, status: &str, location: &str, updated_by: Principal);
}

/// Abstract clock for producing `now` arguments.
///
/// The registry itself never calls this; it is the reference implementation
/// hosts wire in when they have no better clock.
pub trait TimeSource: Send + Sync {
    /// Get current timestamp in seconds since epoch.
    fn now(&self) -> Timestamp;
}

/// System clock time source.
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Notifier that discards everything.
///
/// Default wiring for hosts that do not consume notifications, and for
/// unit tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl ProvenanceNotifier for NoopNotifier {
    fn product_added(
        &self,
        _id: ProductId,
        _name: &str,
        _company_name: &str,
        _manufacturer: Principal,
    ) {
    }

    fn status_updated(
        &self,
        _id: ProductId,
        _status: &str,
        _location: &str,
        _updated_by: Principal,
    ) {
    }
}

/// A notification captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedNotification {
    /// Captured `product_added` call.
    ProductAdded {
        /// The new product's id.
        id: ProductId,
        /// Product name as notified.
        name: String,
        /// Company name as notified.
        company_name: String,
        /// The registering principal.
        manufacturer: Principal,
    },
    /// Captured `status_updated` call.
    StatusUpdated {
        /// The product's id.
        id: ProductId,
        /// The new status label.
        status: String,
        /// The recorded location.
        location: String,
        /// The owner that performed the update.
        updated_by: Principal,
    },
}

/// Notifier that records every call, in order, for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    recorded: Mutex<Vec<RecordedNotification>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all recorded notifications, leaving the recorder empty.
    #[must_use]
    pub fn take(&self) -> Vec<RecordedNotification> {
        self.recorded
            .lock()
            .map(|mut recorded| std::mem::take(&mut *recorded))
            .unwrap_or_default()
    }

    /// Number of notifications recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recorded.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Check whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProvenanceNotifier for RecordingNotifier {
    fn product_added(
        &self,
        id: ProductId,
        name: &str,
        company_name: &str,
        manufacturer: Principal,
    ) {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.push(RecordedNotification::ProductAdded {
                id,
                name: name.to_owned(),
                company_name: company_name.to_owned(),
                manufacturer,
            });
        }
    }

    fn status_updated(&self, id: ProductId, status: &str, location: &str, updated_by: Principal) {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.push(RecordedNotification::StatusUpdated {
                id,
                status: status.to_owned(),
                location: location.to_owned(),
                updated_by,
            });
        }
    }
}
