//! Command handlers for the Notification context.

use campus_catalog::CatalogStore;
use campus_core::clock::Clock;
use campus_core::command::Command;
use campus_core::error::DomainError;
use campus_core::outcome::Outcome;
use tracing::{debug, info};

use crate::domain::commands::SendNotification;
use crate::domain::outcomes::{NotificationFailure, NotificationSent};
use crate::domain::recipients::{BROADCAST_SENTINEL, RecipientType};
use crate::ledger::NotificationLedger;

/// Outcome of a send command.
pub type SendOutcome = Outcome<NotificationSent, NotificationFailure>;

fn resolve_recipients(
    command: &SendNotification,
    store: &CatalogStore,
) -> Result<Vec<String>, DomainError> {
    match command.recipient_type {
        RecipientType::AllParticipants => store
            .with_event(&command.event_id, |event| event.participants().to_vec()),
        RecipientType::SpecificStudents => match &command.recipient_ids {
            Some(ids) if !ids.is_empty() => Ok(ids.clone()),
            _ => Err(DomainError::InvalidArgument(
                "recipient_ids required for specific_students".into(),
            )),
        },
        RecipientType::AllStudents => Ok(vec![BROADCAST_SENTINEL.to_owned()]),
    }
}

/// Handles the `SendNotification` command.
///
/// Participants are snapshotted at send time; later registrations do not
/// change a recorded notification.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if `all_participants` names an unknown
/// event, `DomainError::InvalidArgument` if `specific_students` comes without
/// ids, and `DomainError::Infrastructure` if a lock is poisoned.
pub fn handle_send(
    command: &SendNotification,
    clock: &dyn Clock,
    store: &CatalogStore,
    ledger: &NotificationLedger,
) -> Result<SendOutcome, DomainError> {
    let recipients = resolve_recipients(command, store)?;

    if recipients.is_empty() {
        debug!(
            command = command.command_type(),
            correlation_id = %command.correlation_id(),
            event_id = %command.event_id,
            recipient_type = %command.recipient_type,
            "notification has no recipients"
        );
        return Ok(Outcome::Failure(NotificationFailure::NoRecipients));
    }

    let record = ledger.append(
        clock,
        &command.event_id,
        &command.message,
        command.recipient_type,
        recipients,
    )?;

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        event_id = %record.event_id,
        recipient_type = %record.recipient_type,
        recipient_count = record.recipient_count,
        message = %record.message,
        "notification sent"
    );

    Ok(Outcome::Success(NotificationSent {
        event_id: record.event_id,
        recipient_count: record.recipient_count,
        sent_at: record.timestamp,
    }))
}
