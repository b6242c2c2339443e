//! Catalog records and the fixed seed set.

pub mod event;
pub mod seed;
pub mod venue;
