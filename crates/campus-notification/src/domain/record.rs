//! The audit record appended for every sent notification.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::recipients::RecipientType;

/// One sent notification. Immutable once appended to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRecord {
    /// When the notification was sent.
    pub timestamp: DateTime<Utc>,
    /// The event the notification concerns.
    pub event_id: String,
    /// Message body.
    pub message: String,
    /// How recipients were chosen.
    pub recipient_type: RecipientType,
    /// Number of recipients.
    pub recipient_count: usize,
    /// Recipient ids in resolution order.
    pub recipients: Vec<String>,
}

impl NotificationRecord {
    /// Builds a record; `recipient_count` is derived from `recipients`.
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        event_id: String,
        message: String,
        recipient_type: RecipientType,
        recipients: Vec<String>,
    ) -> Self {
        Self {
            timestamp,
            event_id,
            message,
            recipient_type,
            recipient_count: recipients.len(),
            recipients,
        }
    }
}
