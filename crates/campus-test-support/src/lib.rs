//! Shared test clocks and catalog fixtures for the campus events engine.

mod catalog;
mod clock;

pub use catalog::{event_with_capacity, store_with, venue_with_capacity};
pub use clock::{FixedClock, SteppingClock, fixed_now};
