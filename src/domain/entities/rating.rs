use crate::domain::value_objects::RatingRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One rater's live vote for one target user on one event. The
/// (rater, rated, event) triple is the ledger key: re-rating replaces the
/// value, it never adds a second entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub rater_uid: String,
    pub rated_uid: String,
    pub event_id: String,
    pub role: RatingRole,
    pub value: u8,
    pub created_at: DateTime<Utc>,
}
