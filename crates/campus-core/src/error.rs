//! Domain error types.
//!
//! These are *protocol* errors: the request could not be carried out at all.
//! Business-rule rejections (event full, slot taken, ...) are not errors and
//! travel as [`Outcome::Failure`](crate::outcome::Outcome) instead.

use std::fmt;
use std::sync::PoisonError;

use thiserror::Error;

/// The kind of catalog record a lookup was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A campus event.
    Event,
    /// A bookable venue.
    Venue,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event => f.write_str("Event"),
            Self::Venue => f.write_str("Venue"),
        }
    }
}

/// Top-level domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced event or venue does not exist.
    #[error("{kind} '{id}' not found")]
    NotFound {
        /// What was looked up.
        kind: RecordKind,
        /// The identifier that missed.
        id: String,
    },

    /// A required field is missing or malformed.
    #[error("{0}")]
    InvalidArgument(String),

    /// An internal fault, such as a poisoned record lock.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Shorthand for a missing event.
    #[must_use]
    pub fn event_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: RecordKind::Event,
            id: id.into(),
        }
    }

    /// Shorthand for a missing venue.
    #[must_use]
    pub fn venue_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: RecordKind::Venue,
            id: id.into(),
        }
    }
}

impl<T> From<PoisonError<T>> for DomainError {
    fn from(err: PoisonError<T>) -> Self {
        Self::Infrastructure(format!("record lock poisoned: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_kind_and_id() {
        assert_eq!(
            DomainError::event_not_found("ai_workshop").to_string(),
            "Event 'ai_workshop' not found"
        );
        assert_eq!(
            DomainError::venue_not_found("lab_cs9").to_string(),
            "Venue 'lab_cs9' not found"
        );
    }

    #[test]
    fn test_invalid_argument_message_is_verbatim() {
        let err = DomainError::InvalidArgument("Invalid recipient_type".into());
        assert_eq!(err.to_string(), "Invalid recipient_type");
    }

    #[test]
    fn test_poisoned_lock_maps_to_infrastructure() {
        let lock = std::sync::Mutex::new(0_u32);
        let _ = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = lock.lock().unwrap();
                panic!("poison the lock");
            })
            .join()
        });

        let err: DomainError = lock.lock().unwrap_err().into();
        assert!(matches!(err, DomainError::Infrastructure(_)));
    }
}
