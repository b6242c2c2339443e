//! Campus events: Registration bounded context.
//!
//! Adds and removes students on an event's participant list while keeping
//! the list duplicate-free and within the event's capacity.

pub mod application;
pub mod domain;
