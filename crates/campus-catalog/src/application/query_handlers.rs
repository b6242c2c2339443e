//! Query handlers for the Catalog context.
//!
//! Each handler copies the record out from under its lock and returns a
//! read-only, serializable view.

use campus_core::error::DomainError;
use serde::Serialize;

use crate::domain::event::Event;
use crate::domain::venue::{Booking, Venue};
use crate::store::CatalogStore;

/// Read-only view of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventView {
    /// The event identifier.
    pub event_id: String,
    /// Display name.
    pub name: String,
    /// Calendar date.
    pub date: String,
    /// Time range.
    pub time: String,
    /// Venue display name.
    pub venue: String,
    /// Free-form description.
    pub description: String,
    /// Capacity.
    pub max_participants: u32,
    /// Registered student ids in registration order.
    pub participants: Vec<String>,
}

impl From<&Event> for EventView {
    fn from(event: &Event) -> Self {
        Self {
            event_id: event.id.clone(),
            name: event.name.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            venue: event.venue.clone(),
            description: event.description.clone(),
            max_participants: event.max_participants(),
            participants: event.participants().to_vec(),
        }
    }
}

/// Read-only view of a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueView {
    /// The venue identifier.
    pub venue_id: String,
    /// Display name.
    pub name: String,
    /// Capacity.
    pub capacity: u32,
    /// Facilities on offer.
    pub facilities: Vec<String>,
    /// Bookings in acceptance order.
    pub bookings: Vec<Booking>,
}

impl From<&Venue> for VenueView {
    fn from(venue: &Venue) -> Self {
        Self {
            venue_id: venue.id.clone(),
            name: venue.name.clone(),
            capacity: venue.capacity(),
            facilities: venue.facilities.clone(),
            bookings: venue.bookings().to_vec(),
        }
    }
}

/// Lists every event in catalog order.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if a record lock is poisoned.
pub fn list_events(store: &CatalogStore) -> Result<Vec<EventView>, DomainError> {
    store.map_events(|event| EventView::from(event))
}

/// Retrieves one event.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no event has this id.
pub fn get_event(store: &CatalogStore, event_id: &str) -> Result<EventView, DomainError> {
    store.with_event(event_id, |event| EventView::from(event))
}

/// Lists every venue in catalog order.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if a record lock is poisoned.
pub fn list_venues(store: &CatalogStore) -> Result<Vec<VenueView>, DomainError> {
    store.map_venues(|venue| VenueView::from(venue))
}

/// Retrieves one venue.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no venue has this id.
pub fn get_venue(store: &CatalogStore, venue_id: &str) -> Result<VenueView, DomainError> {
    store.with_venue(venue_id, |venue| VenueView::from(venue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_event_returns_seeded_details() {
        // Arrange
        let store = CatalogStore::seeded();

        // Act
        let view = get_event(&store, "ai_workshop").unwrap();

        // Assert
        assert_eq!(view.name, "AI & Machine Learning Workshop");
        assert_eq!(view.venue, "Seminar Hall B");
        assert_eq!(view.max_participants, 50);
        assert!(view.participants.is_empty());
    }

    #[test]
    fn test_get_event_returns_not_found_for_unknown_id() {
        let store = CatalogStore::seeded();

        let result = get_event(&store, "spring_gala");

        assert_eq!(result, Err(DomainError::event_not_found("spring_gala")));
    }

    #[test]
    fn test_get_venue_returns_facilities_in_order() {
        let store = CatalogStore::seeded();

        let view = get_venue(&store, "lab_cs1").unwrap();

        assert_eq!(view.capacity, 60);
        assert_eq!(
            view.facilities,
            ["Computers", "Projector", "Whiteboard", "AC"]
        );
    }

    #[test]
    fn test_list_handlers_return_full_catalog() {
        let store = CatalogStore::seeded();

        assert_eq!(list_events(&store).unwrap().len(), 4);
        assert_eq!(list_venues(&store).unwrap().len(), 6);
    }

    #[test]
    fn test_event_view_serializes_with_wire_field_names() {
        let store = CatalogStore::seeded();
        let view = get_event(&store, "techfest2024").unwrap();

        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["event_id"], "techfest2024");
        assert_eq!(json["max_participants"], 500);
        assert_eq!(json["participants"], serde_json::json!([]));
    }
}
