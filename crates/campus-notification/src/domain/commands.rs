//! Commands for the Notification context.

use campus_core::command::Command;
use uuid::Uuid;

use super::recipients::RecipientType;

/// Command to send a notification about an event.
#[derive(Debug, Clone)]
pub struct SendNotification {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event the notification concerns.
    pub event_id: String,
    /// Message body.
    pub message: String,
    /// How recipients are chosen.
    pub recipient_type: RecipientType,
    /// Explicit recipients; required for `SpecificStudents`, ignored otherwise.
    pub recipient_ids: Option<Vec<String>>,
}

impl Command for SendNotification {
    fn command_type(&self) -> &'static str {
        "notification.send"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
