//! Query handlers for the Booking context.
//!
//! Availability is a projection over a venue's booking list; nothing here
//! mutates the store.

use campus_catalog::CatalogStore;
use campus_catalog::domain::venue::Booking;
use campus_core::error::DomainError;
use serde::Serialize;

use crate::domain::SLOTS_PER_DAY;

/// Availability of a single `(date, time_slot)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotAvailability {
    /// The venue identifier.
    pub venue_id: String,
    /// Venue display name.
    pub venue_name: String,
    /// Calendar date asked about.
    pub date: String,
    /// Slot label asked about.
    pub time_slot: String,
    /// `true` when no booking holds the slot.
    pub available: bool,
    /// Bookings holding the slot.
    pub existing_bookings: Vec<Booking>,
}

/// Booking summary for a whole day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAvailability {
    /// The venue identifier.
    pub venue_id: String,
    /// Venue display name.
    pub venue_name: String,
    /// Calendar date asked about.
    pub date: String,
    /// Number of slots modelled per day.
    pub available_slots: u32,
    /// Number of bookings on the date.
    pub booked_slots: usize,
    /// Bookings on the date in acceptance order.
    pub bookings: Vec<Booking>,
}

/// Answer to an availability query; the shape depends on whether a slot was
/// given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Availability {
    /// A specific slot was asked about.
    Slot(SlotAvailability),
    /// The whole day was asked about.
    Day(DayAvailability),
}

/// Checks whether a venue is free on `date`, optionally at `time_slot`.
///
/// A blank `time_slot` is treated as absent and yields the whole-day summary.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the venue does not exist.
pub fn check_availability(
    store: &CatalogStore,
    venue_id: &str,
    date: &str,
    time_slot: Option<&str>,
) -> Result<Availability, DomainError> {
    let time_slot = time_slot.filter(|slot| !slot.trim().is_empty());
    store.with_venue(venue_id, |venue| match time_slot {
        Some(time_slot) => {
            let existing_bookings: Vec<Booking> =
                venue.bookings_at(date, time_slot).cloned().collect();
            Availability::Slot(SlotAvailability {
                venue_id: venue.id.clone(),
                venue_name: venue.name.clone(),
                date: date.to_owned(),
                time_slot: time_slot.to_owned(),
                available: existing_bookings.is_empty(),
                existing_bookings,
            })
        }
        None => {
            let bookings: Vec<Booking> = venue.bookings_on(date).cloned().collect();
            Availability::Day(DayAvailability {
                venue_id: venue.id.clone(),
                venue_name: venue.name.clone(),
                date: date.to_owned(),
                available_slots: SLOTS_PER_DAY,
                booked_slots: bookings.len(),
                bookings,
            })
        }
    })
}

#[cfg(test)]
mod tests {
    use campus_catalog::CatalogStore;
    use campus_core::error::DomainError;
    use campus_test_support::{FixedClock, fixed_now};
    use uuid::Uuid;

    use super::{Availability, check_availability};
    use crate::application::command_handlers::handle_book;
    use crate::domain::commands::BookVenue;

    fn seed_booking(store: &CatalogStore, date: &str, slot: &str) {
        let command = BookVenue {
            correlation_id: Uuid::new_v4(),
            venue_id: "lab_cs1".into(),
            club_name: "Coding Club".into(),
            date: date.into(),
            time_slot: slot.into(),
            purpose: "Workshop".into(),
            expected_attendees: 30,
        };
        let outcome = handle_book(&command, &FixedClock(fixed_now()), store).unwrap();
        assert!(outcome.is_success());
    }

    #[test]
    fn test_booked_slot_is_unavailable() {
        // Arrange
        let store = CatalogStore::seeded();
        seed_booking(&store, "2024-04-20", "09:00-10:00");

        // Act
        let availability =
            check_availability(&store, "lab_cs1", "2024-04-20", Some("09:00-10:00")).unwrap();

        // Assert
        let slot = match availability {
            Availability::Slot(slot) => slot,
            other => panic!("expected slot availability, got {other:?}"),
        };
        assert!(!slot.available);
        assert_eq!(slot.existing_bookings.len(), 1);
        assert_eq!(slot.existing_bookings[0].club_name, "Coding Club");
        assert_eq!(slot.venue_name, "Computer Lab 1");
    }

    #[test]
    fn test_free_slot_is_available() {
        let store = CatalogStore::seeded();
        seed_booking(&store, "2024-04-20", "09:00-10:00");

        let availability =
            check_availability(&store, "lab_cs1", "2024-04-20", Some("10:00-11:00")).unwrap();

        let slot = match availability {
            Availability::Slot(slot) => slot,
            other => panic!("expected slot availability, got {other:?}"),
        };
        assert!(slot.available);
        assert!(slot.existing_bookings.is_empty());
    }

    #[test]
    fn test_day_query_counts_bookings_on_date_only() {
        // Arrange
        let store = CatalogStore::seeded();
        seed_booking(&store, "2024-04-20", "09:00-10:00");
        seed_booking(&store, "2024-04-20", "13:00-14:00");
        seed_booking(&store, "2024-04-21", "09:00-10:00");

        // Act
        let availability = check_availability(&store, "lab_cs1", "2024-04-20", None).unwrap();

        // Assert
        let day = match availability {
            Availability::Day(day) => day,
            other => panic!("expected day availability, got {other:?}"),
        };
        assert_eq!(day.available_slots, 8);
        assert_eq!(day.booked_slots, 2);
        let slots: Vec<&str> = day.bookings.iter().map(|b| b.time_slot.as_str()).collect();
        assert_eq!(slots, ["09:00-10:00", "13:00-14:00"]);
    }

    #[test]
    fn test_blank_slot_falls_back_to_day_summary() {
        // Arrange
        let store = CatalogStore::seeded();
        seed_booking(&store, "2024-04-20", "09:00-10:00");

        // Act
        let availability = check_availability(&store, "lab_cs1", "2024-04-20", Some("")).unwrap();

        // Assert
        let day = match availability {
            Availability::Day(day) => day,
            other => panic!("expected day availability, got {other:?}"),
        };
        assert_eq!(day.available_slots, 8);
        assert_eq!(day.booked_slots, 1);
    }

    #[test]
    fn test_availability_returns_not_found_for_unknown_venue() {
        let store = CatalogStore::seeded();

        let result = check_availability(&store, "rooftop", "2024-04-20", None);

        assert_eq!(result, Err(DomainError::venue_not_found("rooftop")));
    }

    #[test]
    fn test_slot_availability_serializes_flat() {
        let store = CatalogStore::seeded();

        let availability =
            check_availability(&store, "seminar_a", "2024-05-02", Some("09:00-10:00")).unwrap();
        let json = serde_json::to_value(&availability).unwrap();

        assert_eq!(json["venue_id"], "seminar_a");
        assert_eq!(json["available"], true);
        assert_eq!(json["existing_bookings"], serde_json::json!([]));
    }
}
