use crate::application::ports::blob_store::{BlobStore, profile_photo_path};
use crate::application::ports::repositories::ProfileRepository;
use crate::domain::entities::UserProfile;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::info;

pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
    blobs: Arc<dyn BlobStore>,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn ProfileRepository>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { repository, blobs }
    }

    /// A uid with no stored profile resolves to a zeroed default rather than
    /// an error, so a freshly registered user is displayable immediately.
    pub async fn get_profile(&self, uid: &str) -> Result<UserProfile, AppError> {
        let profile = self.repository.get_profile(uid).await?;
        Ok(profile.unwrap_or_else(|| UserProfile::empty(uid)))
    }

    /// Persists display fields. The rating accumulators on `profile` are
    /// ignored by the store; only the ledger mutates them.
    pub async fn update_profile(&self, profile: &UserProfile) -> Result<(), AppError> {
        self.repository.upsert_profile(profile).await?;
        info!(uid = %profile.uid, "profile updated");
        Ok(())
    }

    pub async fn set_profile_photo(&self, uid: &str, bytes: &[u8]) -> Result<String, AppError> {
        let url = self.blobs.put(&profile_photo_path(uid), bytes).await?;
        self.repository
            .set_profile_photo_url(uid, Some(url.clone()))
            .await?;
        Ok(url)
    }

    pub async fn delete_profile_photo(&self, uid: &str) -> Result<(), AppError> {
        self.blobs.delete(&profile_photo_path(uid)).await?;
        self.repository.set_profile_photo_url(uid, None).await
    }
}
