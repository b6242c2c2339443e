//! Campus events: Catalog bounded context.
//!
//! Owns the authoritative set of events and venues. Each record sits behind
//! its own lock; the only mutators are the invariant-checking record methods
//! driven by the registration and booking engines.

pub mod application;
pub mod domain;
pub mod store;

pub use store::CatalogStore;
