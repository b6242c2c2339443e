//! Route modules organized by bounded context.

use serde::Serialize;

pub mod events;
pub mod health;
pub mod notifications;
pub mod venues;

/// Body returned for every command: whether the business rules accepted it,
/// the client message, and any detail fields the command adds.
#[derive(Debug, Serialize)]
pub struct CommandResponse<D> {
    /// `false` when a business rule refused the command.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Command-specific fields, flattened into the body.
    #[serde(flatten)]
    pub details: Option<D>,
}

impl<D> CommandResponse<D> {
    /// An accepted command.
    pub fn accepted(message: String, details: Option<D>) -> Self {
        Self {
            success: true,
            message,
            details,
        }
    }

    /// A command refused by a business rule.
    pub fn refused(message: String, details: Option<D>) -> Self {
        Self {
            success: false,
            message,
            details,
        }
    }
}
