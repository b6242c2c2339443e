//! In-memory catalog store with one lock per record.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use campus_core::error::DomainError;
use tracing::info;

use crate::domain::event::Event;
use crate::domain::seed;
use crate::domain::venue::Venue;

/// Authoritative set of events and venues.
///
/// The set of records is fixed at construction; only their contents change.
/// Every closure passed to `with_event*` / `with_venue*` runs while holding
/// that record's lock, so a check followed by a mutation inside one closure
/// is atomic with respect to other callers on the same record.
#[derive(Debug)]
pub struct CatalogStore {
    events: Vec<Mutex<Event>>,
    event_index: HashMap<String, usize>,
    venues: Vec<Mutex<Venue>>,
    venue_index: HashMap<String, usize>,
}

impl CatalogStore {
    /// Builds a store from the given records, keeping their order for listing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if two records share an id or a
    /// record has zero capacity.
    pub fn new(events: Vec<Event>, venues: Vec<Venue>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for event in &events {
            if event.max_participants() == 0 {
                return Err(DomainError::InvalidArgument(format!(
                    "event '{}' must allow at least one participant",
                    event.id
                )));
            }
            if !seen.insert(event.id.as_str()) {
                return Err(DomainError::InvalidArgument(format!(
                    "duplicate event id '{}'",
                    event.id
                )));
            }
        }

        seen.clear();
        for venue in &venues {
            if venue.capacity() == 0 {
                return Err(DomainError::InvalidArgument(format!(
                    "venue '{}' must have a positive capacity",
                    venue.id
                )));
            }
            if !seen.insert(venue.id.as_str()) {
                return Err(DomainError::InvalidArgument(format!(
                    "duplicate venue id '{}'",
                    venue.id
                )));
            }
        }

        Ok(Self::index(events, venues))
    }

    /// Builds the store from the fixed startup catalog.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::index(seed::events(), seed::venues());
        info!(
            events = store.events.len(),
            venues = store.venues.len(),
            "catalog seeded"
        );
        store
    }

    fn index(events: Vec<Event>, venues: Vec<Venue>) -> Self {
        let event_index = events
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        let venue_index = venues
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id.clone(), i))
            .collect();
        Self {
            events: events.into_iter().map(Mutex::new).collect(),
            event_index,
            venues: venues.into_iter().map(Mutex::new).collect(),
            venue_index,
        }
    }

    fn event_slot(&self, event_id: &str) -> Result<&Mutex<Event>, DomainError> {
        self.event_index
            .get(event_id)
            .map(|&i| &self.events[i])
            .ok_or_else(|| DomainError::event_not_found(event_id))
    }

    fn venue_slot(&self, venue_id: &str) -> Result<&Mutex<Venue>, DomainError> {
        self.venue_index
            .get(venue_id)
            .map(|&i| &self.venues[i])
            .ok_or_else(|| DomainError::venue_not_found(venue_id))
    }

    /// Runs `read` against the event under its lock.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` for an unknown id and
    /// `DomainError::Infrastructure` if the record lock is poisoned.
    pub fn with_event<R>(
        &self,
        event_id: &str,
        read: impl FnOnce(&Event) -> R,
    ) -> Result<R, DomainError> {
        let event = self.event_slot(event_id)?.lock()?;
        Ok(read(&event))
    }

    /// Runs `update` against the event under its lock.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogStore::with_event`].
    pub fn with_event_mut<R>(
        &self,
        event_id: &str,
        update: impl FnOnce(&mut Event) -> R,
    ) -> Result<R, DomainError> {
        let mut event = self.event_slot(event_id)?.lock()?;
        Ok(update(&mut event))
    }

    /// Runs `read` against the venue under its lock.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` for an unknown id and
    /// `DomainError::Infrastructure` if the record lock is poisoned.
    pub fn with_venue<R>(
        &self,
        venue_id: &str,
        read: impl FnOnce(&Venue) -> R,
    ) -> Result<R, DomainError> {
        let venue = self.venue_slot(venue_id)?.lock()?;
        Ok(read(&venue))
    }

    /// Runs `update` against the venue under its lock.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogStore::with_venue`].
    pub fn with_venue_mut<R>(
        &self,
        venue_id: &str,
        update: impl FnOnce(&mut Venue) -> R,
    ) -> Result<R, DomainError> {
        let mut venue = self.venue_slot(venue_id)?.lock()?;
        Ok(update(&mut venue))
    }

    /// Maps every event in listing order, locking one record at a time.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a record lock is poisoned.
    pub fn map_events<R>(&self, mut read: impl FnMut(&Event) -> R) -> Result<Vec<R>, DomainError> {
        self.events
            .iter()
            .map(|slot| Ok(read(&*slot.lock()?)))
            .collect()
    }

    /// Maps every venue in listing order, locking one record at a time.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a record lock is poisoned.
    pub fn map_venues<R>(&self, mut read: impl FnMut(&Venue) -> R) -> Result<Vec<R>, DomainError> {
        self.venues
            .iter()
            .map(|slot| Ok(read(&*slot.lock()?)))
            .collect()
    }
}
