//! Query handlers for the Notification context.

use campus_core::error::DomainError;
use serde::Serialize;

use crate::domain::record::NotificationRecord;
use crate::ledger::NotificationLedger;

/// Every notification sent so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationHistory {
    /// Number of records.
    pub total_notifications: usize,
    /// Records, oldest first.
    pub notifications: Vec<NotificationRecord>,
}

/// Returns the notification history.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the ledger lock is poisoned.
pub fn history(ledger: &NotificationLedger) -> Result<NotificationHistory, DomainError> {
    let notifications = ledger.records()?;
    Ok(NotificationHistory {
        total_notifications: notifications.len(),
        notifications,
    })
}
