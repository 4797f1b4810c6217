use crate::application::services::{
    EventService, MembershipService, ProfileService, RatingService,
};
use crate::infrastructure::database::{ConnectionPool, SqliteRepository};
use crate::infrastructure::storage::FsBlobStore;
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Fully wired service layer over a single repository and blob store.
#[derive(Clone)]
pub struct AppServices {
    pub events: Arc<EventService>,
    pub memberships: Arc<MembershipService>,
    pub profiles: Arc<ProfileService>,
    pub ratings: Arc<RatingService>,
}

impl AppServices {
    pub async fn new(config: &AppConfig) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.storage.data_dir)?;

        let pool = ConnectionPool::from_config(&config.database)
            .await
            .map_err(AppError::from)?;
        let repository = Arc::new(SqliteRepository::with_retry(pool, config.retry.clone()));
        repository.initialize().await?;

        let blobs = Arc::new(FsBlobStore::new(&config.storage.data_dir));

        Ok(Self {
            events: Arc::new(EventService::new(repository.clone(), blobs.clone())),
            memberships: Arc::new(MembershipService::new(repository.clone())),
            profiles: Arc::new(ProfileService::new(repository.clone(), blobs)),
            ratings: Arc::new(RatingService::new(repository)),
        })
    }
}
