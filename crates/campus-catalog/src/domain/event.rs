//! The event record and its registration rules.

/// Why an event refused to admit a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionRefusal {
    /// The student is already on the participant list.
    AlreadyRegistered,
    /// The participant list has reached `max_participants`.
    Full,
}

/// A campus event that students register for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Calendar date, e.g. `2024-03-25`.
    pub date: String,
    /// Time range, e.g. `14:00-17:00`.
    pub time: String,
    /// Venue display name. Not checked against the venue catalog.
    pub venue: String,
    /// Free-form description.
    pub description: String,
    max_participants: u32,
    participants: Vec<String>,
}

impl Event {
    /// Creates an event with no participants.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        venue: impl Into<String>,
        description: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date: date.into(),
            time: time.into(),
            venue: venue.into(),
            description: description.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Maximum number of participants.
    #[must_use]
    pub const fn max_participants(&self) -> u32 {
        self.max_participants
    }

    /// Registered student ids in registration order.
    #[must_use]
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Number of registered students.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Returns `true` if `student_id` is registered.
    #[must_use]
    pub fn is_registered(&self, student_id: &str) -> bool {
        self.participants.iter().any(|p| p == student_id)
    }

    fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Appends `student_id` to the participant list and returns the new count.
    ///
    /// The duplicate check runs before the capacity check, so a registered
    /// student is never told the event is full.
    ///
    /// # Errors
    ///
    /// Returns the reason the student could not be admitted; the participant
    /// list is unchanged in that case.
    pub fn admit(&mut self, student_id: &str) -> Result<usize, AdmissionRefusal> {
        if self.is_registered(student_id) {
            return Err(AdmissionRefusal::AlreadyRegistered);
        }
        if self.is_full() {
            return Err(AdmissionRefusal::Full);
        }
        self.participants.push(student_id.to_owned());
        Ok(self.participants.len())
    }

    /// Removes `student_id`, returning `false` if they were not registered.
    pub fn release(&mut self, student_id: &str) -> bool {
        match self.participants.iter().position(|p| p == student_id) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }
}
