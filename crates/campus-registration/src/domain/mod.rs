//! Registration commands and outcomes.

pub mod commands;
pub mod outcomes;
