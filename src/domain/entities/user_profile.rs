use crate::domain::value_objects::RatingRole;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user profile. Display fields belong to the user; the four rating
/// accumulators are owned by the rating ledger and must only change through
/// its transactional rate operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub uid: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub place_of_work: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub interests: Vec<String>,
    pub profile_photo_url: Option<String>,

    pub organizer_ratings_sum: u32,
    pub organizer_ratings_count: u32,
    pub participant_ratings_sum: u32,
    pub participant_ratings_count: u32,
}

impl UserProfile {
    /// The documented read-path fallback for a uid with no stored profile.
    pub fn empty(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            first_name: None,
            last_name: None,
            bio: None,
            place_of_work: None,
            date_of_birth: None,
            interests: Vec::new(),
            profile_photo_url: None,
            organizer_ratings_sum: 0,
            organizer_ratings_count: 0,
            participant_ratings_sum: 0,
            participant_ratings_count: 0,
        }
    }

    pub fn aggregates(&self, role: RatingRole) -> (u32, u32) {
        match role {
            RatingRole::Organizer => (self.organizer_ratings_sum, self.organizer_ratings_count),
            RatingRole::Participant => {
                (self.participant_ratings_sum, self.participant_ratings_count)
            }
        }
    }

    /// `None` when nobody has rated this user in the given role. A user with
    /// no ratings has no average; that is distinct from any numeric value.
    pub fn average_rating(&self, role: RatingRole) -> Option<f64> {
        let (sum, count) = self.aggregates(role);
        if count == 0 {
            return None;
        }
        Some(f64::from(sum) / f64::from(count))
    }

    pub fn average_organizer_rating(&self) -> Option<f64> {
        self.average_rating(RatingRole::Organizer)
    }

    pub fn average_participant_rating(&self) -> Option<f64> {
        self.average_rating(RatingRole::Participant)
    }
}
