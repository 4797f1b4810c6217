use crate::domain::entities::{Event, Rating, UserProfile};
use crate::domain::value_objects::{Coordinates, RatingRole};
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create_event(&self, event: &Event) -> Result<(), AppError>;
    async fn get_event(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn get_all_events(&self) -> Result<Vec<Event>, AppError>;
    /// Events whose membership set contains `user_uid`.
    async fn get_joined_events(&self, user_uid: &str) -> Result<Vec<Event>, AppError>;
    /// Events created by `user_uid`.
    async fn get_user_events(&self, user_uid: &str) -> Result<Vec<Event>, AppError>;
    async fn update_event(&self, event: &Event) -> Result<(), AppError>;
    async fn update_event_coordinates(
        &self,
        id: &str,
        coordinates: Coordinates,
    ) -> Result<(), AppError>;
    async fn set_event_photo_url(&self, id: &str, url: Option<String>) -> Result<(), AppError>;
    async fn delete_event(&self, id: &str) -> Result<(), AppError>;
}

/// The membership set of an event. Join and leave are set-algebra operations
/// applied atomically per call; capacity and the ended check are enforced in
/// the same transaction as the mutation.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Errors: `NotFound` (no such event), `EventEnded`, `EventFull`.
    /// Joining an event the user already belongs to is a no-op success.
    async fn join_event(&self, event_id: &str, user_uid: &str) -> Result<(), AppError>;
    /// Errors: `NotFound` (no such event), `EventEnded`.
    /// Removing a non-member is a no-op success.
    async fn leave_event(&self, event_id: &str, user_uid: &str) -> Result<(), AppError>;
    async fn participants(&self, event_id: &str) -> Result<Vec<String>, AppError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile(&self, uid: &str) -> Result<Option<UserProfile>, AppError>;
    /// Writes display fields only; rating accumulators are owned by the
    /// ledger and are never replaced through this call.
    async fn upsert_profile(&self, profile: &UserProfile) -> Result<(), AppError>;
    async fn set_profile_photo_url(&self, uid: &str, url: Option<String>) -> Result<(), AppError>;
}

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Transactional upsert of one (rater, rated, event) vote plus the
    /// matching aggregate update. Retried on lock conflicts; exhaustion
    /// surfaces as `TransientConflict`.
    async fn record_rating(
        &self,
        rated_uid: &str,
        role: RatingRole,
        value: u8,
        rater_uid: &str,
        event_id: &str,
    ) -> Result<(), AppError>;
    async fn ratings_given_by(
        &self,
        rater_uid: &str,
        event_id: &str,
    ) -> Result<Vec<Rating>, AppError>;
}
