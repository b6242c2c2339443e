//! Booking commands and outcomes.

pub mod commands;
pub mod outcomes;

/// Number of bookable slots modelled per calendar day.
///
/// This is a fixed figure for the day-level availability summary; slot labels
/// themselves are free-form and are not checked against a list of eight.
pub const SLOTS_PER_DAY: u32 = 8;
