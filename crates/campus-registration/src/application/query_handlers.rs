//! Query handlers for the Registration context.

use campus_catalog::CatalogStore;
use campus_core::error::DomainError;
use serde::Serialize;

/// Read-only view of an event's participant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantList {
    /// The event identifier.
    pub event_id: String,
    /// Event display name.
    pub event_name: String,
    /// Number of registered students.
    pub participant_count: usize,
    /// Student ids in registration order.
    pub participants: Vec<String>,
}

/// Lists the participants of an event in registration order.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the event does not exist.
pub fn list_participants(
    store: &CatalogStore,
    event_id: &str,
) -> Result<ParticipantList, DomainError> {
    store.with_event(event_id, |event| ParticipantList {
        event_id: event.id.clone(),
        event_name: event.name.clone(),
        participant_count: event.participant_count(),
        participants: event.participants().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use campus_catalog::CatalogStore;
    use campus_core::error::DomainError;
    use uuid::Uuid;

    use crate::application::command_handlers::handle_register;
    use crate::application::query_handlers::list_participants;
    use crate::domain::commands::RegisterStudent;

    #[test]
    fn test_list_participants_preserves_registration_order() {
        // Arrange
        let store = CatalogStore::seeded();
        for id in ["s3", "s1", "s2"] {
            let command = RegisterStudent {
                correlation_id: Uuid::new_v4(),
                event_id: "hackathon_spring".into(),
                student_id: id.into(),
                student_name: id.into(),
            };
            handle_register(&command, &store).unwrap();
        }

        // Act
        let list = list_participants(&store, "hackathon_spring").unwrap();

        // Assert
        assert_eq!(list.event_name, "Spring Hackathon 2024");
        assert_eq!(list.participant_count, 3);
        assert_eq!(list.participants, ["s3", "s1", "s2"]);
    }

    #[test]
    fn test_list_participants_of_fresh_event_is_empty() {
        let store = CatalogStore::seeded();

        let list = list_participants(&store, "ai_workshop").unwrap();

        assert_eq!(list.participant_count, 0);
        assert!(list.participants.is_empty());
    }

    #[test]
    fn test_list_participants_returns_not_found_for_unknown_event() {
        let store = CatalogStore::seeded();

        let result = list_participants(&store, "spring_gala");

        assert_eq!(result, Err(DomainError::event_not_found("spring_gala")));
    }
}
