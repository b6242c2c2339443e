//! Application-level handlers for the Booking context.

pub mod command_handlers;
pub mod query_handlers;
