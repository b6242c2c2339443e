//! Results of notification commands.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Receipt for a notification that was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationSent {
    /// The event the notification concerns.
    pub event_id: String,
    /// Number of recipients.
    pub recipient_count: usize,
    /// Ledger timestamp of the record.
    pub sent_at: DateTime<Utc>,
}

impl NotificationSent {
    /// Message shown to the sender.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Notification sent to {} recipients", self.recipient_count)
    }
}

/// Business rules that can refuse a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationFailure {
    /// The recipient set resolved to nobody.
    #[error("No recipients found for this notification")]
    NoRecipients,
}
