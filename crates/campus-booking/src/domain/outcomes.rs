//! Results of booking commands.

use campus_catalog::domain::venue::Booking;
use serde::Serialize;
use thiserror::Error;

/// Details returned to a club after a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    /// Venue display name.
    pub venue_name: String,
    /// The venue identifier.
    pub venue_id: String,
    /// Calendar date.
    pub date: String,
    /// Slot label.
    pub time_slot: String,
    /// What the venue is booked for.
    pub purpose: String,
    /// Facilities available at the venue.
    pub facilities: Vec<String>,
    /// The club holding the booking.
    #[serde(skip)]
    pub club_name: String,
}

impl BookingSummary {
    /// Message shown to the club.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Successfully booked {} for {}",
            self.venue_name, self.club_name
        )
    }
}

/// Business rules that can refuse a booking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingFailure {
    /// More attendees than the venue holds.
    #[error("Venue capacity ({capacity}) is less than expected attendees ({expected_attendees})")]
    CapacityExceeded {
        /// The venue's capacity.
        capacity: u32,
        /// The requested headcount.
        expected_attendees: u32,
    },

    /// Another booking already holds the slot.
    #[error("Venue {venue_name} is already booked for {date} at {time_slot}")]
    SlotTaken {
        /// Venue display name.
        venue_name: String,
        /// Calendar date.
        date: String,
        /// Slot label.
        time_slot: String,
        /// The first booking holding the slot.
        existing: Box<Booking>,
    },
}

impl BookingFailure {
    /// The booking that holds the requested slot, if that was the reason.
    #[must_use]
    pub fn existing_booking(&self) -> Option<&Booking> {
        match self {
            Self::SlotTaken { existing, .. } => Some(existing),
            Self::CapacityExceeded { .. } => None,
        }
    }
}
