use super::SqliteRepository;
use super::mapper::map_rating_row;
use super::queries::{
    INSERT_PROFILE_IF_ABSENT, SELECT_PROFILE_BY_UID, SELECT_RATING_VALUE,
    SELECT_RATINGS_BY_RATER_AND_EVENT, UPDATE_ORGANIZER_AGGREGATES,
    UPDATE_PARTICIPANT_AGGREGATES, UPSERT_RATING,
};
use crate::application::ports::repositories::RatingRepository;
use crate::domain::entities::Rating;
use crate::domain::value_objects::RatingRole;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

impl SqliteRepository {
    /// One transaction covers the prior-vote read, the aggregate read and
    /// both writes. A first vote grows sum and count; a repeat vote by the
    /// same rater replaces its contribution and leaves the count alone.
    async fn try_record_rating(
        &self,
        rated_uid: &str,
        role: RatingRole,
        value: u8,
        rater_uid: &str,
        event_id: &str,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.get_pool().begin().await?;

        let old_value: Option<i64> = sqlx::query(SELECT_RATING_VALUE)
            .bind(rater_uid)
            .bind(rated_uid)
            .bind(event_id)
            .fetch_optional(&mut *tx)
            .await?
            .map(|row| row.try_get("rating_value"))
            .transpose()?;

        // A target with no profile document yet starts from zeroed
        // aggregates; the row is created inside the same transaction.
        sqlx::query(INSERT_PROFILE_IF_ABSENT)
            .bind(rated_uid)
            .execute(&mut *tx)
            .await?;

        let profile = sqlx::query(SELECT_PROFILE_BY_UID)
            .bind(rated_uid)
            .fetch_one(&mut *tx)
            .await?;
        let (sum_column, count_column) = match role {
            RatingRole::Organizer => ("organizer_ratings_sum", "organizer_ratings_count"),
            RatingRole::Participant => ("participant_ratings_sum", "participant_ratings_count"),
        };
        let sum: i64 = profile.try_get(sum_column)?;
        let count: i64 = profile.try_get(count_column)?;

        let (new_sum, new_count) = match old_value {
            None => (sum + i64::from(value), count + 1),
            Some(old) => (sum - old + i64::from(value), count),
        };

        let update = match role {
            RatingRole::Organizer => UPDATE_ORGANIZER_AGGREGATES,
            RatingRole::Participant => UPDATE_PARTICIPANT_AGGREGATES,
        };
        sqlx::query(update)
            .bind(new_sum)
            .bind(new_count)
            .bind(rated_uid)
            .execute(&mut *tx)
            .await?;

        sqlx::query(UPSERT_RATING)
            .bind(rater_uid)
            .bind(rated_uid)
            .bind(event_id)
            .bind(role.as_str())
            .bind(i64::from(value))
            .bind(Utc::now().timestamp_millis())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl RatingRepository for SqliteRepository {
    async fn record_rating(
        &self,
        rated_uid: &str,
        role: RatingRole,
        value: u8,
        rater_uid: &str,
        event_id: &str,
    ) -> Result<(), AppError> {
        self.retry_write(|| self.try_record_rating(rated_uid, role, value, rater_uid, event_id))
            .await
    }

    async fn ratings_given_by(
        &self,
        rater_uid: &str,
        event_id: &str,
    ) -> Result<Vec<Rating>, AppError> {
        let rows = sqlx::query(SELECT_RATINGS_BY_RATER_AND_EVENT)
            .bind(rater_uid)
            .bind(event_id)
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut ratings = Vec::with_capacity(rows.len());
        for row in rows {
            ratings.push(map_rating_row(&row)?);
        }
        Ok(ratings)
    }
}
