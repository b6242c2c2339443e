//! The venue record, its bookings, and the booking rules.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A reservation of one venue for one `(date, time_slot)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    /// The club holding the booking.
    pub club_name: String,
    /// Calendar date, e.g. `2024-04-20`.
    pub date: String,
    /// Slot label, e.g. `09:00-10:00`. Compared verbatim.
    pub time_slot: String,
    /// What the venue is booked for.
    pub purpose: String,
    /// Headcount the club expects.
    pub expected_attendees: u32,
    /// When the booking was accepted.
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    /// Returns `true` if this booking occupies `(date, time_slot)`.
    #[must_use]
    pub fn occupies(&self, date: &str, time_slot: &str) -> bool {
        self.date == date && self.time_slot == time_slot
    }
}

/// Why a venue refused a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationRefusal {
    /// More attendees than the venue holds.
    CapacityExceeded {
        /// The venue's capacity.
        capacity: u32,
    },
    /// The slot already belongs to someone else.
    SlotTaken(Booking),
}

/// A bookable campus venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Facilities on offer, in display order.
    pub facilities: Vec<String>,
    capacity: u32,
    bookings: Vec<Booking>,
}

impl Venue {
    /// Creates a venue with no bookings.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        capacity: u32,
        facilities: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            facilities: facilities.into_iter().map(Into::into).collect(),
            capacity,
            bookings: Vec::new(),
        }
    }

    /// Maximum headcount.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// All bookings in the order they were accepted.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Bookings on `date`, in acceptance order.
    pub fn bookings_on<'a>(&'a self, date: &'a str) -> impl Iterator<Item = &'a Booking> + 'a {
        self.bookings.iter().filter(move |b| b.date == date)
    }

    /// Bookings holding `(date, time_slot)`. At most one while the
    /// no-double-booking invariant holds.
    pub fn bookings_at<'a>(
        &'a self,
        date: &'a str,
        time_slot: &'a str,
    ) -> impl Iterator<Item = &'a Booking> + 'a {
        self.bookings
            .iter()
            .filter(move |b| b.occupies(date, time_slot))
    }

    /// Appends `booking` if it fits the venue and its slot is free.
    ///
    /// Capacity is checked before the slot scan.
    ///
    /// # Errors
    ///
    /// Returns the refusal reason, carrying the first conflicting booking for
    /// a taken slot. The booking list is unchanged in that case.
    pub fn reserve(&mut self, booking: Booking) -> Result<(), ReservationRefusal> {
        if booking.expected_attendees > self.capacity {
            return Err(ReservationRefusal::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if let Some(existing) = self.bookings_at(&booking.date, &booking.time_slot).next() {
            return Err(ReservationRefusal::SlotTaken(existing.clone()));
        }
        self.bookings.push(booking);
        Ok(())
    }
}
