//! Campus Core: shared domain abstractions.
//!
//! This crate defines the traits and types that every engine crate depends
//! on: the injected clock, the command marker trait, the error taxonomy, and
//! the success/domain-failure outcome. It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod outcome;
