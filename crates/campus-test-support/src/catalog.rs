//! Catalog fixtures: small stores with one record each, for capacity and
//! conflict tests that need tight limits.

use std::sync::Arc;

use campus_catalog::CatalogStore;
use campus_catalog::domain::event::Event;
use campus_catalog::domain::venue::Venue;

/// An event named after its id with the given participant limit.
#[must_use]
pub fn event_with_capacity(id: &str, max_participants: u32) -> Event {
    Event::new(
        id,
        id,
        "2024-05-01",
        "18:00-20:00",
        "Seminar Hall A",
        "fixture event",
        max_participants,
    )
}

/// A venue named after its id with the given capacity and one facility.
#[must_use]
pub fn venue_with_capacity(id: &str, capacity: u32) -> Venue {
    Venue::new(id, id, capacity, ["Projector"])
}

/// Wraps the given records in a shared store.
///
/// # Panics
///
/// Panics if the fixtures are invalid (duplicate ids, zero capacity).
#[must_use]
pub fn store_with(events: Vec<Event>, venues: Vec<Venue>) -> Arc<CatalogStore> {
    Arc::new(CatalogStore::new(events, venues).expect("fixture catalog must be valid"))
}
