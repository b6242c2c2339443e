//! Commands for the Registration context.

use campus_core::command::Command;
use uuid::Uuid;

/// Command to register a student for an event.
#[derive(Debug, Clone)]
pub struct RegisterStudent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event to register for.
    pub event_id: String,
    /// The student's identifier.
    pub student_id: String,
    /// The student's display name, used in messages only.
    pub student_name: String,
}

impl Command for RegisterStudent {
    fn command_type(&self) -> &'static str {
        "registration.register_student"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to remove a student from an event.
#[derive(Debug, Clone)]
pub struct UnregisterStudent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event to leave.
    pub event_id: String,
    /// The student's identifier.
    pub student_id: String,
}

impl Command for UnregisterStudent {
    fn command_type(&self) -> &'static str {
        "registration.unregister_student"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
