//! Command handlers for the Registration context.
//!
//! Each handler runs its whole check-then-mutate sequence inside a single
//! `with_event_mut` call, so concurrent registrations for the same event are
//! serialized on that event's lock.

use campus_catalog::CatalogStore;
use campus_catalog::domain::event::AdmissionRefusal;
use campus_core::command::Command;
use campus_core::error::DomainError;
use campus_core::outcome::Outcome;
use tracing::{debug, info};

use crate::domain::commands::{RegisterStudent, UnregisterStudent};
use crate::domain::outcomes::{EventSnapshot, Registration, RegistrationFailure, Unregistration};

/// Outcome of a register command.
pub type RegisterOutcome = Outcome<Registration, RegistrationFailure>;

/// Outcome of an unregister command.
pub type UnregisterOutcome = Outcome<Unregistration, RegistrationFailure>;

fn require_student_id(student_id: &str) -> Result<(), DomainError> {
    if student_id.trim().is_empty() {
        return Err(DomainError::InvalidArgument(
            "student_id must not be empty".into(),
        ));
    }
    Ok(())
}

/// Handles the `RegisterStudent` command.
///
/// A student already on the list is told so even when the event is full.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the event does not exist and
/// `DomainError::InvalidArgument` for an empty student id.
pub fn handle_register(
    command: &RegisterStudent,
    store: &CatalogStore,
) -> Result<RegisterOutcome, DomainError> {
    require_student_id(&command.student_id)?;

    let outcome = store.with_event_mut(&command.event_id, |event| {
        match event.admit(&command.student_id) {
            Ok(participants_count) => Outcome::Success(Registration {
                student_name: command.student_name.clone(),
                event: EventSnapshot {
                    event_name: event.name.clone(),
                    date: event.date.clone(),
                    time: event.time.clone(),
                    venue: event.venue.clone(),
                    participants_count,
                },
            }),
            Err(AdmissionRefusal::AlreadyRegistered) => {
                Outcome::Failure(RegistrationFailure::AlreadyRegistered {
                    student_name: command.student_name.clone(),
                    event_name: event.name.clone(),
                })
            }
            Err(AdmissionRefusal::Full) => Outcome::Failure(RegistrationFailure::EventFull {
                event_name: event.name.clone(),
                max_participants: event.max_participants(),
            }),
        }
    })?;

    match &outcome {
        Outcome::Success(registration) => info!(
            command = command.command_type(),
            correlation_id = %command.correlation_id(),
            event_id = %command.event_id,
            student_id = %command.student_id,
            participants = registration.event.participants_count,
            "registered student"
        ),
        Outcome::Failure(reason) => debug!(
            command = command.command_type(),
            correlation_id = %command.correlation_id(),
            event_id = %command.event_id,
            student_id = %command.student_id,
            %reason,
            "registration refused"
        ),
    }

    Ok(outcome)
}

/// Handles the `UnregisterStudent` command. Unregistering a student who is
/// not on the list changes nothing and reports `NotRegistered`.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the event does not exist and
/// `DomainError::InvalidArgument` for an empty student id.
pub fn handle_unregister(
    command: &UnregisterStudent,
    store: &CatalogStore,
) -> Result<UnregisterOutcome, DomainError> {
    require_student_id(&command.student_id)?;

    let outcome = store.with_event_mut(&command.event_id, |event| {
        if event.release(&command.student_id) {
            Outcome::Success(Unregistration {
                event_name: event.name.clone(),
            })
        } else {
            Outcome::Failure(RegistrationFailure::NotRegistered {
                student_id: command.student_id.clone(),
                event_name: event.name.clone(),
            })
        }
    })?;

    match &outcome {
        Outcome::Success(_) => info!(
            command = command.command_type(),
            correlation_id = %command.correlation_id(),
            event_id = %command.event_id,
            student_id = %command.student_id,
            "unregistered student"
        ),
        Outcome::Failure(reason) => debug!(
            command = command.command_type(),
            correlation_id = %command.correlation_id(),
            event_id = %command.event_id,
            %reason,
            "unregistration refused"
        ),
    }

    Ok(outcome)
}
