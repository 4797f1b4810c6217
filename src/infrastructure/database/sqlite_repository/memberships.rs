use super::SqliteRepository;
use super::queries::{
    DELETE_PARTICIPANT, INSERT_PARTICIPANT, SELECT_EVENT_GATE_FIELDS, SELECT_IS_PARTICIPANT,
    SELECT_PARTICIPANT_COUNT, SELECT_PARTICIPANT_UIDS,
};
use crate::application::ports::repositories::MembershipRepository;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

impl SqliteRepository {
    /// Existence, ended and capacity checks share one transaction with the
    /// membership insert, so two concurrent joins against a near-full event
    /// cannot both pass a stale count: the loser conflicts, retries and
    /// re-reads the committed state.
    async fn try_join_event(&self, event_id: &str, user_uid: &str) -> Result<(), AppError> {
        let now = Utc::now();
        let mut tx = self.pool.get_pool().begin().await?;

        let gate = sqlx::query(SELECT_EVENT_GATE_FIELDS)
            .bind(event_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("event {event_id}")))?;

        let date_millis: i64 = gate.try_get("date")?;
        let max_people: i64 = gate.try_get("max_people")?;
        if date_millis < now.timestamp_millis() {
            return Err(AppError::EventEnded(event_id.to_string()));
        }

        let already_member: i64 = sqlx::query(SELECT_IS_PARTICIPANT)
            .bind(event_id)
            .bind(user_uid)
            .fetch_one(&mut *tx)
            .await?
            .try_get("count")?;
        if already_member > 0 {
            // Repeated join is a no-op success.
            return Ok(());
        }

        let member_count: i64 = sqlx::query(SELECT_PARTICIPANT_COUNT)
            .bind(event_id)
            .fetch_one(&mut *tx)
            .await?
            .try_get("count")?;
        if member_count >= max_people {
            return Err(AppError::EventFull(event_id.to_string()));
        }

        sqlx::query(INSERT_PARTICIPANT)
            .bind(event_id)
            .bind(user_uid)
            .bind(now.timestamp_millis())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn try_leave_event(&self, event_id: &str, user_uid: &str) -> Result<(), AppError> {
        let mut tx = self.pool.get_pool().begin().await?;

        let gate = sqlx::query(SELECT_EVENT_GATE_FIELDS)
            .bind(event_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("event {event_id}")))?;

        let date_millis: i64 = gate.try_get("date")?;
        if date_millis < Utc::now().timestamp_millis() {
            return Err(AppError::EventEnded(event_id.to_string()));
        }

        // Set difference: removing a non-member changes nothing and succeeds.
        sqlx::query(DELETE_PARTICIPANT)
            .bind(event_id)
            .bind(user_uid)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl MembershipRepository for SqliteRepository {
    async fn join_event(&self, event_id: &str, user_uid: &str) -> Result<(), AppError> {
        self.retry_write(|| self.try_join_event(event_id, user_uid))
            .await
    }

    async fn leave_event(&self, event_id: &str, user_uid: &str) -> Result<(), AppError> {
        self.retry_write(|| self.try_leave_event(event_id, user_uid))
            .await
    }

    async fn participants(&self, event_id: &str) -> Result<Vec<String>, AppError> {
        let rows = sqlx::query(SELECT_PARTICIPANT_UIDS)
            .bind(event_id)
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut uids = Vec::with_capacity(rows.len());
        for row in rows {
            uids.push(row.try_get("user_uid")?);
        }
        Ok(uids)
    }
}
