//! Who a notification is addressed to.

use std::fmt;
use std::str::FromStr;

use campus_core::error::DomainError;
use serde::Serialize;

/// Placeholder recipient standing in for every student. There is no student
/// directory to expand it against.
pub const BROADCAST_SENTINEL: &str = "all_students_broadcast";

/// How the recipients of a notification are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientType {
    /// Everyone registered for the event at send time.
    AllParticipants,
    /// An explicit list of student ids, used verbatim.
    SpecificStudents,
    /// Every student, represented by [`BROADCAST_SENTINEL`].
    AllStudents,
}

impl RecipientType {
    /// Wire name of the variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllParticipants => "all_participants",
            Self::SpecificStudents => "specific_students",
            Self::AllStudents => "all_students",
        }
    }
}

impl fmt::Display for RecipientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipientType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all_participants" => Ok(Self::AllParticipants),
            "specific_students" => Ok(Self::SpecificStudents),
            "all_students" => Ok(Self::AllStudents),
            _ => Err(DomainError::InvalidArgument("Invalid recipient_type".into())),
        }
    }
}
