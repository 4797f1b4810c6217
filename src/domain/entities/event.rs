use crate::domain::value_objects::Coordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A location-tagged event. Identity (`id`) and `created_by` are fixed at
/// creation; the membership set is mutated only through join/leave, never by
/// an event update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub themes: Vec<String>,
    pub description: String,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub date: DateTime<Utc>,
    pub max_people: u32,
    pub created_by: String,
    pub photo_url: Option<String>,
    pub participant_uids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or replacing the mutable part of an
/// event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraft {
    pub name: String,
    pub themes: Vec<String>,
    pub description: String,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub date: DateTime<Utc>,
    pub max_people: u32,
    pub photo_url: Option<String>,
}

impl Event {
    /// The organizer starts out in the membership set.
    pub fn new(draft: EventDraft, created_by: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            themes: draft.themes,
            description: draft.description,
            location: draft.location,
            coordinates: draft.coordinates,
            date: draft.date,
            max_people: draft.max_people,
            photo_url: draft.photo_url,
            participant_uids: vec![created_by.clone()],
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Ended is a wall-clock predicate. Once the date has passed, update,
    /// delete, join and leave are all rejected.
    pub fn has_ended(&self) -> bool {
        self.date < Utc::now()
    }

    /// Read-side accessor for callers rendering a loaded event; the join
    /// path enforces capacity against the store, not this snapshot.
    pub fn is_full(&self) -> bool {
        self.participant_uids.len() as u32 >= self.max_people
    }

    /// Read-side accessor for callers deciding between join and leave
    /// controls on a loaded event.
    pub fn is_participant(&self, uid: &str) -> bool {
        self.participant_uids.iter().any(|p| p == uid)
    }

    /// Replaces the organizer-editable fields. Membership and identity are
    /// untouched.
    pub fn apply(&mut self, draft: EventDraft) {
        self.name = draft.name;
        self.themes = draft.themes;
        self.description = draft.description;
        self.location = draft.location;
        self.coordinates = draft.coordinates;
        self.date = draft.date;
        self.max_people = draft.max_people;
        self.photo_url = draft.photo_url;
        self.updated_at = Utc::now();
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
