//! Campus events: Notification bounded context.
//!
//! Resolves who a notification is addressed to and appends an immutable
//! record of it to an audit ledger. Nothing is actually delivered; sending
//! is logged only.

pub mod application;
pub mod domain;
pub mod ledger;

pub use ledger::NotificationLedger;
