//! Notification commands, recipient rules, records and outcomes.

pub mod commands;
pub mod outcomes;
pub mod recipients;
pub mod record;
