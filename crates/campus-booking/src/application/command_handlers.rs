//! Command handlers for the Booking context.
//!
//! The capacity check, slot scan and append all run under the venue's lock,
//! so two clubs racing for the same slot cannot both win.

use campus_catalog::CatalogStore;
use campus_catalog::domain::venue::{Booking, ReservationRefusal};
use campus_core::clock::Clock;
use campus_core::command::Command;
use campus_core::error::DomainError;
use campus_core::outcome::Outcome;
use tracing::{debug, info};

use crate::domain::commands::BookVenue;
use crate::domain::outcomes::{BookingFailure, BookingSummary};

/// Outcome of a book command.
pub type BookOutcome = Outcome<BookingSummary, BookingFailure>;

fn validate(command: &BookVenue) -> Result<(), DomainError> {
    if command.expected_attendees == 0 {
        return Err(DomainError::InvalidArgument(
            "expected_attendees must be a positive integer".into(),
        ));
    }
    if command.date.trim().is_empty() {
        return Err(DomainError::InvalidArgument("date must not be empty".into()));
    }
    if command.time_slot.trim().is_empty() {
        return Err(DomainError::InvalidArgument(
            "time_slot must not be empty".into(),
        ));
    }
    Ok(())
}

/// Handles the `BookVenue` command.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the venue does not exist and
/// `DomainError::InvalidArgument` for a zero headcount or blank date/slot.
pub fn handle_book(
    command: &BookVenue,
    clock: &dyn Clock,
    store: &CatalogStore,
) -> Result<BookOutcome, DomainError> {
    validate(command)?;

    let outcome = store.with_venue_mut(&command.venue_id, |venue| {
        let booking = Booking {
            club_name: command.club_name.clone(),
            date: command.date.clone(),
            time_slot: command.time_slot.clone(),
            purpose: command.purpose.clone(),
            expected_attendees: command.expected_attendees,
            booked_at: clock.now(),
        };

        match venue.reserve(booking) {
            Ok(()) => Outcome::Success(BookingSummary {
                venue_name: venue.name.clone(),
                venue_id: venue.id.clone(),
                date: command.date.clone(),
                time_slot: command.time_slot.clone(),
                purpose: command.purpose.clone(),
                facilities: venue.facilities.clone(),
                club_name: command.club_name.clone(),
            }),
            Err(ReservationRefusal::CapacityExceeded { capacity }) => {
                Outcome::Failure(BookingFailure::CapacityExceeded {
                    capacity,
                    expected_attendees: command.expected_attendees,
                })
            }
            Err(ReservationRefusal::SlotTaken(existing)) => {
                Outcome::Failure(BookingFailure::SlotTaken {
                    venue_name: venue.name.clone(),
                    date: command.date.clone(),
                    time_slot: command.time_slot.clone(),
                    existing: Box::new(existing),
                })
            }
        }
    })?;

    match &outcome {
        Outcome::Success(_) => info!(
            command = command.command_type(),
            correlation_id = %command.correlation_id(),
            venue_id = %command.venue_id,
            club_name = %command.club_name,
            date = %command.date,
            time_slot = %command.time_slot,
            "booked venue"
        ),
        Outcome::Failure(reason) => debug!(
            command = command.command_type(),
            correlation_id = %command.correlation_id(),
            venue_id = %command.venue_id,
            %reason,
            "booking refused"
        ),
    }

    Ok(outcome)
}
