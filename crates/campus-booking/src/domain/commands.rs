//! Commands for the Booking context.

use campus_core::command::Command;
use uuid::Uuid;

/// Command to book a venue for one slot.
#[derive(Debug, Clone)]
pub struct BookVenue {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The venue to book.
    pub venue_id: String,
    /// The club making the booking.
    pub club_name: String,
    /// Calendar date.
    pub date: String,
    /// Slot label.
    pub time_slot: String,
    /// What the venue is booked for.
    pub purpose: String,
    /// Expected headcount.
    pub expected_attendees: u32,
}

impl Command for BookVenue {
    fn command_type(&self) -> &'static str {
        "booking.book_venue"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
