use crate::application::ports::repositories::RatingRepository;
use crate::domain::entities::UserProfile;
use crate::domain::value_objects::RatingRole;
use crate::shared::error::AppError;
use crate::shared::validation::validate_rating_value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// The rating ledger. A rater casts one 1–5 vote per (target, event); the
/// target's per-role aggregate is kept consistent by the repository's
/// transaction, so re-rating corrects the sum without growing the count.
pub struct RatingService {
    repository: Arc<dyn RatingRepository>,
}

impl RatingService {
    pub fn new(repository: Arc<dyn RatingRepository>) -> Self {
        Self { repository }
    }

    /// Self-rating is deliberately not rejected here; callers decide whether
    /// to offer the UI for it.
    pub async fn rate(
        &self,
        rated_uid: &str,
        role: RatingRole,
        value: u8,
        rater_uid: &str,
        event_id: &str,
    ) -> Result<(), AppError> {
        validate_rating_value(value)?;
        self.repository
            .record_rating(rated_uid, role, value, rater_uid, event_id)
            .await?;
        debug!(%rated_uid, %rater_uid, %event_id, role = %role, value, "rating recorded");
        Ok(())
    }

    /// Snapshot of the votes `rater_uid` has already cast on an event, keyed
    /// by target uid. Used to pre-fill rating controls.
    pub async fn ratings_given_by(
        &self,
        rater_uid: &str,
        event_id: &str,
    ) -> Result<HashMap<String, u8>, AppError> {
        let ratings = self.repository.ratings_given_by(rater_uid, event_id).await?;
        Ok(ratings
            .into_iter()
            .map(|rating| (rating.rated_uid, rating.value))
            .collect())
    }

    pub fn average_for(profile: &UserProfile, role: RatingRole) -> Option<f64> {
        profile.average_rating(role)
    }
}
