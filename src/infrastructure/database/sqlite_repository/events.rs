use super::SqliteRepository;
use super::mapper::map_event_row;
use super::queries::{
    DELETE_EVENT, DELETE_EVENT_PARTICIPANTS, INSERT_EVENT, INSERT_PARTICIPANT,
    SELECT_ALL_EVENTS, SELECT_EVENT_BY_ID, SELECT_EVENTS_BY_CREATOR,
    SELECT_EVENTS_JOINED_BY_USER, SELECT_PARTICIPANT_UIDS, UPDATE_EVENT,
    UPDATE_EVENT_COORDINATES, UPDATE_EVENT_PHOTO_URL,
};
use crate::application::ports::repositories::EventRepository;
use crate::domain::entities::Event;
use crate::domain::value_objects::Coordinates;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use tracing::warn;

impl SqliteRepository {
    async fn load_participants(&self, event_id: &str) -> Result<Vec<String>, AppError> {
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

    /// Maps rows to events, dropping malformed rows the way the read path
    /// always has, then attaches each event's membership set.
    async fn collect_events(&self, rows: Vec<SqliteRow>) -> Result<Vec<Event>, AppError> {
        let mut events = Vec::with_capacity(rows.len());
        for row in rows {
            match map_event_row(&row) {
                Ok(mut event) => {
                    event.participant_uids = self.load_participants(&event.id).await?;
                    events.push(event);
                }
                Err(err) => warn!(%err, "skipping malformed event row"),
            }
        }
        Ok(events)
    }
}

#[async_trait]
impl EventRepository for SqliteRepository {
    async fn create_event(&self, event: &Event) -> Result<(), AppError> {
        let themes = serde_json::to_string(&event.themes)?;
        let mut tx = self.pool.get_pool().begin().await?;

        sqlx::query(INSERT_EVENT)
            .bind(&event.id)
            .bind(&event.name)
            .bind(&themes)
            .bind(&event.description)
            .bind(&event.location)
            .bind(event.coordinates.map(|c| c.latitude))
            .bind(event.coordinates.map(|c| c.longitude))
            .bind(event.date.timestamp_millis())
            .bind(i64::from(event.max_people))
            .bind(&event.created_by)
            .bind(&event.photo_url)
            .bind(event.created_at.timestamp_millis())
            .bind(event.updated_at.timestamp_millis())
            .execute(&mut *tx)
            .await?;

        let joined_at = Utc::now().timestamp_millis();
        for uid in &event.participant_uids {
            sqlx::query(INSERT_PARTICIPANT)
                .bind(&event.id)
                .bind(uid)
                .bind(joined_at)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get_event(&self, id: &str) -> Result<Option<Event>, AppError> {
        let row = sqlx::query(SELECT_EVENT_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => {
                let mut event = map_event_row(&row)?;
                event.participant_uids = self.load_participants(&event.id).await?;
                Ok(Some(event))
            }
            None => Ok(None),
        }
    }

    async fn get_all_events(&self) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query(SELECT_ALL_EVENTS)
            .fetch_all(self.pool.get_pool())
            .await?;
        self.collect_events(rows).await
    }

    async fn get_joined_events(&self, user_uid: &str) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query(SELECT_EVENTS_JOINED_BY_USER)
            .bind(user_uid)
            .fetch_all(self.pool.get_pool())
            .await?;
        self.collect_events(rows).await
    }

    async fn get_user_events(&self, user_uid: &str) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query(SELECT_EVENTS_BY_CREATOR)
            .bind(user_uid)
            .fetch_all(self.pool.get_pool())
            .await?;
        self.collect_events(rows).await
    }

    async fn update_event(&self, event: &Event) -> Result<(), AppError> {
        let themes = serde_json::to_string(&event.themes)?;
        sqlx::query(UPDATE_EVENT)
            .bind(&event.name)
            .bind(&themes)
            .bind(&event.description)
            .bind(&event.location)
            .bind(event.coordinates.map(|c| c.latitude))
            .bind(event.coordinates.map(|c| c.longitude))
            .bind(event.date.timestamp_millis())
            .bind(i64::from(event.max_people))
            .bind(&event.photo_url)
            .bind(Utc::now().timestamp_millis())
            .bind(&event.id)
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }

    async fn update_event_coordinates(
        &self,
        id: &str,
        coordinates: Coordinates,
    ) -> Result<(), AppError> {
        sqlx::query(UPDATE_EVENT_COORDINATES)
            .bind(coordinates.latitude)
            .bind(coordinates.longitude)
            .bind(Utc::now().timestamp_millis())
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }

    async fn set_event_photo_url(&self, id: &str, url: Option<String>) -> Result<(), AppError> {
        sqlx::query(UPDATE_EVENT_PHOTO_URL)
            .bind(url)
            .bind(Utc::now().timestamp_millis())
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }

    async fn delete_event(&self, id: &str) -> Result<(), AppError> {
        let mut tx = self.pool.get_pool().begin().await?;

        sqlx::query(DELETE_EVENT_PARTICIPANTS)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query(DELETE_EVENT).bind(id).execute(&mut *tx).await?;

        tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::repositories::MembershipRepository;
    use crate::domain::entities::EventDraft;
    use crate::infrastructure::database::sqlite_repository::tests::setup_repository;
    use chrono::{Duration, Utc};

    fn draft(name: &str) -> EventDraft {
        EventDraft {
            name: name.to_string(),
            themes: vec!["Board games".to_string(), "Networking".to_string()],
            description: "Bring a friend".to_string(),
            location: "Community hall".to_string(),
            coordinates: Some(Coordinates::new(50.4501, 30.5234)),
            date: Utc::now() + Duration::days(2),
            max_people: 20,
            photo_url: None,
        }
    }

    #[tokio::test]
    async fn create_and_read_back_round_trips_fields() {
        let repo = setup_repository().await;
        let event = Event::new(draft("Games night"), "organizer".to_string());
        repo.create_event(&event).await.unwrap();

        let stored = repo.get_event(&event.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Games night");
        assert_eq!(stored.themes.len(), 2);
        assert_eq!(stored.created_by, "organizer");
        assert_eq!(stored.max_people, 20);
        assert_eq!(
            stored.coordinates.map(|c| (c.latitude, c.longitude)),
            Some((50.4501, 30.5234))
        );
        assert_eq!(stored.participant_uids, vec!["organizer".to_string()]);
        assert_eq!(stored.date.timestamp_millis(), event.date.timestamp_millis());
    }

    #[tokio::test]
    async fn missing_event_reads_as_none() {
        let repo = setup_repository().await;
        assert!(repo.get_event("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_membership() {
        let repo = setup_repository().await;
        let mut event = Event::new(draft("Games night"), "organizer".to_string());
        repo.create_event(&event).await.unwrap();
        repo.join_event(&event.id, "uid-1").await.unwrap();

        let mut new_draft = draft("Quiz night");
        new_draft.max_people = 8;
        new_draft.coordinates = None;
        event.apply(new_draft);
        repo.update_event(&event).await.unwrap();

        let stored = repo.get_event(&event.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Quiz night");
        assert_eq!(stored.max_people, 8);
        assert!(stored.coordinates.is_none());
        assert_eq!(stored.participant_uids.len(), 2);
    }

    #[tokio::test]
    async fn coordinate_write_back() {
        let repo = setup_repository().await;
        let mut event = Event::new(draft("Games night"), "organizer".to_string());
        event.coordinates = None;
        repo.create_event(&event).await.unwrap();

        repo.update_event_coordinates(&event.id, Coordinates::new(48.45, 35.05))
            .await
            .unwrap();

        let stored = repo.get_event(&event.id).await.unwrap().unwrap();
        assert_eq!(
            stored.coordinates.map(|c| (c.latitude, c.longitude)),
            Some((48.45, 35.05))
        );
    }

    #[tokio::test]
    async fn queries_split_by_creator_and_membership() {
        let repo = setup_repository().await;
        let mine = Event::new(draft("Mine"), "me".to_string());
        let theirs = Event::new(draft("Theirs"), "them".to_string());
        repo.create_event(&mine).await.unwrap();
        repo.create_event(&theirs).await.unwrap();
        repo.join_event(&theirs.id, "me").await.unwrap();

        let all = repo.get_all_events().await.unwrap();
        assert_eq!(all.len(), 2);

        let created = repo.get_user_events("me").await.unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].id, mine.id);

        // Creator sits in their own membership set, so "joined" covers both.
        let mut joined: Vec<String> = repo
            .get_joined_events("me")
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        joined.sort();
        let mut expected = vec![mine.id.clone(), theirs.id.clone()];
        expected.sort();
        assert_eq!(joined, expected);
    }

    #[tokio::test]
    async fn delete_removes_event_and_membership_rows() {
        let repo = setup_repository().await;
        let event = Event::new(draft("Games night"), "organizer".to_string());
        repo.create_event(&event).await.unwrap();
        repo.join_event(&event.id, "uid-1").await.unwrap();

        repo.delete_event(&event.id).await.unwrap();

        assert!(repo.get_event(&event.id).await.unwrap().is_none());
        assert!(repo.participants(&event.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn photo_url_set_and_clear() {
        let repo = setup_repository().await;
        let event = Event::new(draft("Games night"), "organizer".to_string());
        repo.create_event(&event).await.unwrap();

        repo.set_event_photo_url(&event.id, Some("blob://photo".to_string()))
            .await
            .unwrap();
        let stored = repo.get_event(&event.id).await.unwrap().unwrap();
        assert_eq!(stored.photo_url.as_deref(), Some("blob://photo"));

        repo.set_event_photo_url(&event.id, None).await.unwrap();
        let stored = repo.get_event(&event.id).await.unwrap().unwrap();
        assert!(stored.photo_url.is_none());
    }
}
