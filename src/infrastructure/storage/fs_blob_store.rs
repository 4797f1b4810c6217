use crate::application::ports::blob_store::BlobStore;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filesystem-backed blob store rooted at the configured data directory.
/// Stands in for the hosted bucket the app's photos live in.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, AppError> {
        let relative = Path::new(path);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(AppError::InvalidInput(format!("bad blob path: {path}")));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<String, AppError> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&full, bytes).await?;
        debug!(%path, len = bytes.len(), "blob stored");
        Ok(format!("file://{}", full.display()))
    }

    async fn delete(&self, path: &str) -> Result<(), AppError> {
        let full = self.resolve(path)?;
        match tokio::fs::remove_file(&full).await {
            Ok(()) => Ok(()),
            // Deleting a blob that was never uploaded is fine.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
