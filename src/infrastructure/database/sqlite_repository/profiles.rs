use super::SqliteRepository;
use super::mapper::map_profile_row;
use super::queries::{
    SELECT_PROFILE_BY_UID, UPSERT_PROFILE_DISPLAY_FIELDS, UPSERT_PROFILE_PHOTO_URL,
};
use crate::application::ports::repositories::ProfileRepository;
use crate::domain::entities::UserProfile;
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
impl ProfileRepository for SqliteRepository {
    async fn get_profile(&self, uid: &str) -> Result<Option<UserProfile>, AppError> {
        let row = sqlx::query(SELECT_PROFILE_BY_UID)
            .bind(uid)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_profile_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert_profile(&self, profile: &UserProfile) -> Result<(), AppError> {
        let interests = serde_json::to_string(&profile.interests)?;
        // The four rating accumulators are absent from the insert column list
        // and the update set: only the ledger writes them.
        sqlx::query(UPSERT_PROFILE_DISPLAY_FIELDS)
            .bind(&profile.uid)
            .bind(&profile.first_name)
            .bind(&profile.last_name)
            .bind(&profile.bio)
            .bind(&profile.place_of_work)
            .bind(profile.date_of_birth.map(|d| d.to_string()))
            .bind(&interests)
            .bind(&profile.profile_photo_url)
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }

    async fn set_profile_photo_url(&self, uid: &str, url: Option<String>) -> Result<(), AppError> {
        sqlx::query(UPSERT_PROFILE_PHOTO_URL)
            .bind(uid)
            .bind(url)
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::repositories::RatingRepository;
    use crate::domain::value_objects::RatingRole;
    use crate::infrastructure::database::sqlite_repository::tests::setup_repository;
    use chrono::NaiveDate;

    fn sample_profile(uid: &str) -> UserProfile {
        let mut profile = UserProfile::empty(uid);
        profile.first_name = Some("Ada".to_string());
        profile.last_name = Some("Lovelace".to_string());
        profile.bio = Some("Enjoys long walks and short proofs".to_string());
        profile.place_of_work = Some("Analytical Engine Co".to_string());
        profile.date_of_birth = NaiveDate::from_ymd_opt(1995, 12, 10);
        profile.interests = vec!["Mathematics".to_string(), "Music".to_string()];
        profile
    }

    #[tokio::test]
    async fn upsert_and_read_back() {
        let repo = setup_repository().await;
        repo.upsert_profile(&sample_profile("uid-1")).await.unwrap();

        let stored = repo.get_profile("uid-1").await.unwrap().unwrap();
        assert_eq!(stored.first_name.as_deref(), Some("Ada"));
        assert_eq!(stored.interests.len(), 2);
        assert_eq!(stored.date_of_birth, NaiveDate::from_ymd_opt(1995, 12, 10));
        assert_eq!(stored.organizer_ratings_count, 0);
    }

    #[tokio::test]
    async fn missing_profile_reads_as_none() {
        let repo = setup_repository().await;
        assert!(repo.get_profile("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn display_update_never_touches_ledger_aggregates() {
        let repo = setup_repository().await;
        repo.upsert_profile(&sample_profile("uid-1")).await.unwrap();
        repo.record_rating("uid-1", RatingRole::Organizer, 5, "rater", "event-1")
            .await
            .unwrap();

        // A stale in-memory profile carries zeroed accumulators; writing it
        // back must not reset what the ledger recorded.
        let mut stale = sample_profile("uid-1");
        stale.bio = Some("Updated bio".to_string());
        repo.upsert_profile(&stale).await.unwrap();

        let stored = repo.get_profile("uid-1").await.unwrap().unwrap();
        assert_eq!(stored.bio.as_deref(), Some("Updated bio"));
        assert_eq!(stored.organizer_ratings_sum, 5);
        assert_eq!(stored.organizer_ratings_count, 1);
    }

    #[tokio::test]
    async fn photo_url_upsert_creates_row_when_absent() {
        let repo = setup_repository().await;
        repo.set_profile_photo_url("uid-1", Some("blob://avatar".to_string()))
            .await
            .unwrap();

        let stored = repo.get_profile("uid-1").await.unwrap().unwrap();
        assert_eq!(stored.profile_photo_url.as_deref(), Some("blob://avatar"));

        repo.set_profile_photo_url("uid-1", None).await.unwrap();
        let stored = repo.get_profile("uid-1").await.unwrap().unwrap();
        assert!(stored.profile_photo_url.is_none());
    }
}
