use crate::application::ports::blob_store::{BlobStore, event_photo_path};
use crate::application::ports::repositories::EventRepository;
use crate::domain::entities::{Event, EventDraft};
use crate::domain::value_objects::Coordinates;
use crate::shared::error::AppError;
use crate::shared::validation::validate_event_draft;
use std::sync::Arc;
use tracing::{info, warn};

/// Event lifecycle: create, organizer-gated update/delete, coordinate
/// write-back from geocoding, photo blob handling, and the read queries the
/// presentation layer lists events from.
pub struct EventService {
    repository: Arc<dyn EventRepository>,
    blobs: Arc<dyn BlobStore>,
}

impl EventService {
    pub fn new(repository: Arc<dyn EventRepository>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { repository, blobs }
    }

    pub async fn create_event(
        &self,
        draft: EventDraft,
        created_by: &str,
    ) -> Result<Event, AppError> {
        validate_event_draft(&draft)?;
        let event = Event::new(draft, created_by.to_string());
        self.repository.create_event(&event).await?;
        info!(event_id = %event.id, %created_by, "event created");
        Ok(event)
    }

    pub async fn update_event(
        &self,
        event_id: &str,
        acting_uid: &str,
        draft: EventDraft,
    ) -> Result<Event, AppError> {
        validate_event_draft(&draft)?;
        let mut event = self.load_owned(event_id, acting_uid).await?;
        event.apply(draft);
        self.repository.update_event(&event).await?;
        info!(%event_id, "event updated");
        Ok(event)
    }

    /// Called once geocoding resolves the human-readable address.
    pub async fn update_coordinates(
        &self,
        event_id: &str,
        coordinates: Coordinates,
    ) -> Result<(), AppError> {
        self.repository
            .update_event_coordinates(event_id, coordinates)
            .await
    }

    pub async fn delete_event(&self, event_id: &str, acting_uid: &str) -> Result<(), AppError> {
        self.load_owned(event_id, acting_uid).await?;
        self.repository.delete_event(event_id).await?;
        // A missing photo blob is fine; anything else should not undo the
        // event deletion, so it is logged rather than propagated.
        if let Err(err) = self.blobs.delete(&event_photo_path(event_id)).await {
            warn!(%event_id, %err, "event photo cleanup failed");
        }
        info!(%event_id, "event deleted");
        Ok(())
    }

    pub async fn set_event_photo(
        &self,
        event_id: &str,
        acting_uid: &str,
        bytes: &[u8],
    ) -> Result<String, AppError> {
        self.load_owned(event_id, acting_uid).await?;
        let url = self.blobs.put(&event_photo_path(event_id), bytes).await?;
        self.repository
            .set_event_photo_url(event_id, Some(url.clone()))
            .await?;
        Ok(url)
    }

    pub async fn get_event(&self, event_id: &str) -> Result<Option<Event>, AppError> {
        self.repository.get_event(event_id).await
    }

    pub async fn get_all_events(&self) -> Result<Vec<Event>, AppError> {
        self.repository.get_all_events().await
    }

    pub async fn get_joined_events(&self, user_uid: &str) -> Result<Vec<Event>, AppError> {
        self.repository.get_joined_events(user_uid).await
    }

    pub async fn get_user_events(&self, user_uid: &str) -> Result<Vec<Event>, AppError> {
        self.repository.get_user_events(user_uid).await
    }

    /// Organizer-only mutations on an event that has not ended.
    async fn load_owned(&self, event_id: &str, acting_uid: &str) -> Result<Event, AppError> {
        let event = self
            .repository
            .get_event(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("event {event_id}")))?;
        if event.created_by != acting_uid {
            return Err(AppError::NotAuthorized(format!(
                "{acting_uid} is not the organizer of event {event_id}"
            )));
        }
        if event.has_ended() {
            return Err(AppError::EventEnded(event_id.to_string()));
        }
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use mockall::mock;

    mock! {
        pub EventRepo {}

        #[async_trait]
        impl EventRepository for EventRepo {
            async fn create_event(&self, event: &Event) -> Result<(), AppError>;
            async fn get_event(&self, id: &str) -> Result<Option<Event>, AppError>;
            async fn get_all_events(&self) -> Result<Vec<Event>, AppError>;
            async fn get_joined_events(&self, user_uid: &str) -> Result<Vec<Event>, AppError>;
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
    }

    mock! {
        pub Blobs {}

        #[async_trait]
        impl BlobStore for Blobs {
            async fn put(&self, path: &str, bytes: &[u8]) -> Result<String, AppError>;
            async fn delete(&self, path: &str) -> Result<(), AppError>;
        }
    }

    fn draft(date_offset_hours: i64) -> EventDraft {
        EventDraft {
            name: "Picnic at the park".to_string(),
            themes: vec!["Picnic".to_string()],
            description: "Blankets provided".to_string(),
            location: "Central park".to_string(),
            coordinates: None,
            date: Utc::now() + Duration::hours(date_offset_hours),
            max_people: 12,
            photo_url: None,
        }
    }

    fn stored_event(created_by: &str, date_offset_hours: i64) -> Event {
        Event::new(draft(date_offset_hours), created_by.to_string())
    }

    #[tokio::test]
    async fn create_persists_and_seeds_membership() {
        let mut repo = MockEventRepo::new();
        repo.expect_create_event()
            .withf(|event: &Event| {
                event.participant_uids == vec!["organizer".to_string()]
                    && event.created_by == "organizer"
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = EventService::new(Arc::new(repo), Arc::new(MockBlobs::new()));
        let event = service.create_event(draft(24), "organizer").await.unwrap();
        assert!(!event.id.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_invalid_draft_before_store() {
        let mut repo = MockEventRepo::new();
        repo.expect_create_event().times(0);

        let service = EventService::new(Arc::new(repo), Arc::new(MockBlobs::new()));
        let mut bad = draft(24);
        bad.max_people = 0;
        let result = service.create_event(bad, "organizer").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn update_by_non_owner_is_rejected() {
        let mut repo = MockEventRepo::new();
        let stored = stored_event("organizer", 24);
        let id = stored.id.clone();
        repo.expect_get_event()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_update_event().times(0);

        let service = EventService::new(Arc::new(repo), Arc::new(MockBlobs::new()));
        let result = service.update_event(&id, "someone-else", draft(48)).await;
        assert!(matches!(result, Err(AppError::NotAuthorized(_))));
    }

    #[tokio::test]
    async fn update_on_ended_event_is_rejected() {
        let mut repo = MockEventRepo::new();
        let stored = stored_event("organizer", -1);
        let id = stored.id.clone();
        repo.expect_get_event()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_update_event().times(0);

        let service = EventService::new(Arc::new(repo), Arc::new(MockBlobs::new()));
        let result = service.update_event(&id, "organizer", draft(48)).await;
        assert!(matches!(result, Err(AppError::EventEnded(_))));
    }

    #[tokio::test]
    async fn update_replaces_fields_without_touching_membership() {
        let mut repo = MockEventRepo::new();
        let mut stored = stored_event("organizer", 24);
        stored.participant_uids.push("guest".to_string());
        let id = stored.id.clone();
        repo.expect_get_event()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_update_event()
            .withf(|event: &Event| event.participant_uids.len() == 2 && event.max_people == 12)
            .times(1)
            .returning(|_| Ok(()));

        let service = EventService::new(Arc::new(repo), Arc::new(MockBlobs::new()));
        let updated = service.update_event(&id, "organizer", draft(48)).await.unwrap();
        assert_eq!(updated.participant_uids.len(), 2);
    }

    #[tokio::test]
    async fn delete_removes_event_and_photo() {
        let mut repo = MockEventRepo::new();
        let stored = stored_event("organizer", 24);
        let id = stored.id.clone();
        let expected_path = event_photo_path(&id);
        repo.expect_get_event()
            .returning(move |_| Ok(Some(stored.clone())));
        let deleted_id = id.clone();
        repo.expect_delete_event()
            .withf(move |candidate| candidate == deleted_id)
            .times(1)
            .returning(|_| Ok(()));

        let mut blobs = MockBlobs::new();
        blobs
            .expect_delete()
            .withf(move |path| path == expected_path)
            .times(1)
            .returning(|_| Ok(()));

        let service = EventService::new(Arc::new(repo), Arc::new(blobs));
        assert!(service.delete_event(&id, "organizer").await.is_ok());
    }

    #[tokio::test]
    async fn set_photo_uploads_then_stores_url() {
        let mut repo = MockEventRepo::new();
        let stored = stored_event("organizer", 24);
        let id = stored.id.clone();
        repo.expect_get_event()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_set_event_photo_url()
            .withf(|_, url| url.as_deref() == Some("blob://photo"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut blobs = MockBlobs::new();
        blobs
            .expect_put()
            .times(1)
            .returning(|_, _| Ok("blob://photo".to_string()));

        let service = EventService::new(Arc::new(repo), Arc::new(blobs));
        let url = service
            .set_event_photo(&id, "organizer", &[0xFF, 0xD8])
            .await
            .unwrap();
        assert_eq!(url, "blob://photo");
    }

    #[tokio::test]
    async fn missing_event_is_not_found() {
        let mut repo = MockEventRepo::new();
        repo.expect_get_event().returning(|_| Ok(None));

        let service = EventService::new(Arc::new(repo), Arc::new(MockBlobs::new()));
        let result = service.delete_event("nope", "organizer").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
