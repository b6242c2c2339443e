//! Application-level handlers for the Notification context.

pub mod command_handlers;
pub mod query_handlers;
