//! Campus events: Booking bounded context.
//!
//! Reserves venues for `(date, time_slot)` pairs without double-booking or
//! exceeding capacity, and answers availability questions from the same
//! booking list.

pub mod application;
pub mod domain;
