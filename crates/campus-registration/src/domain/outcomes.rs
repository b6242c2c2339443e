//! Results of registration commands.

use serde::Serialize;
use thiserror::Error;

/// Event details returned to a student after registering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSnapshot {
    /// Event display name.
    pub event_name: String,
    /// Calendar date.
    pub date: String,
    /// Time range.
    pub time: String,
    /// Venue display name.
    pub venue: String,
    /// Participant count including the new registration.
    pub participants_count: usize,
}

/// A successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Who was registered.
    pub student_name: String,
    /// The event as it stands after the registration.
    pub event: EventSnapshot,
}

impl Registration {
    /// Message shown to the student.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Successfully registered {} for {}",
            self.student_name, self.event.event_name
        )
    }
}

/// A successful unregistration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unregistration {
    /// Event display name.
    pub event_name: String,
}

impl Unregistration {
    /// Message shown to the student.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Successfully unregistered from {}", self.event_name)
    }
}

/// Business rules that can refuse a registration change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationFailure {
    /// The student is already on the list.
    #[error("Student {student_name} is already registered for {event_name}")]
    AlreadyRegistered {
        /// The student's display name.
        student_name: String,
        /// Event display name.
        event_name: String,
    },

    /// No seats left.
    #[error("Event {event_name} is full (max capacity: {max_participants})")]
    EventFull {
        /// Event display name.
        event_name: String,
        /// The event's capacity.
        max_participants: u32,
    },

    /// Unregistering a student who is not on the list.
    #[error("Student {student_id} is not registered for {event_name}")]
    NotRegistered {
        /// The student's identifier.
        student_id: String,
        /// Event display name.
        event_name: String,
    },
}
