//! Read-side handlers for the catalog.

pub mod query_handlers;
