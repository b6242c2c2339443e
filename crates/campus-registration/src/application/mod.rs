//! Application-level handlers for the Registration context.

pub mod command_handlers;
pub mod query_handlers;
