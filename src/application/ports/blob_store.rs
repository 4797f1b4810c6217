use crate::shared::error::AppError;
use async_trait::async_trait;

/// Photo blob storage. Paths are deterministic per owner, so re-uploading
/// replaces the previous photo in place.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` at `path` and returns a URL for the stored object.
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<String, AppError>;
    /// Deleting an object that does not exist is a success.
    async fn delete(&self, path: &str) -> Result<(), AppError>;
}

pub fn event_photo_path(event_id: &str) -> String {
    format!("event_photos/{event_id}.jpg")
}

pub fn profile_photo_path(uid: &str) -> String {
    format!("user_profile_photos/{uid}.jpg")
}
