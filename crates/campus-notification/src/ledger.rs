//! Append-only notification ledger.

use std::sync::Mutex;

use campus_core::clock::Clock;
use campus_core::error::DomainError;

use crate::domain::recipients::RecipientType;
use crate::domain::record::NotificationRecord;

/// Ordered log of every notification sent during the process lifetime.
///
/// Records are stamped inside the ledger's critical section, so ledger order
/// and timestamp order agree.
#[derive(Debug, Default)]
pub struct NotificationLedger {
    records: Mutex<Vec<NotificationRecord>>,
}

impl NotificationLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps and appends a record, returning a copy of it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the ledger lock is poisoned.
    pub fn append(
        &self,
        clock: &dyn Clock,
        event_id: &str,
        message: &str,
        recipient_type: RecipientType,
        recipients: Vec<String>,
    ) -> Result<NotificationRecord, DomainError> {
        let mut records = self.records.lock()?;
        let record = NotificationRecord::new(
            clock.now(),
            event_id.to_owned(),
            message.to_owned(),
            recipient_type,
            recipients,
        );
        records.push(record.clone());
        Ok(record)
    }

    /// Returns every record, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the ledger lock is poisoned.
    pub fn records(&self) -> Result<Vec<NotificationRecord>, DomainError> {
        Ok(self.records.lock()?.clone())
    }

    /// Number of records.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the ledger lock is poisoned.
    pub fn len(&self) -> Result<usize, DomainError> {
        Ok(self.records.lock()?.len())
    }
}
