//! Shared application state.

use std::sync::Arc;

use campus_catalog::CatalogStore;
use campus_core::clock::Clock;
use campus_notification::NotificationLedger;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Events and venues, one lock per record.
    pub store: Arc<CatalogStore>,
    /// Notification audit trail.
    pub ledger: Arc<NotificationLedger>,
    /// Time source for booking and notification timestamps.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        store: Arc<CatalogStore>,
        ledger: Arc<NotificationLedger>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            ledger,
            clock,
        }
    }
}
