use crate::application::ports::repositories::MembershipRepository;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Join/leave over an event's membership set. All enforcement (existence,
/// ended, capacity, duplicate safety) happens inside the repository's
/// transaction; this service is the call surface and logging point.
pub struct MembershipService {
    repository: Arc<dyn MembershipRepository>,
}

impl MembershipService {
    pub fn new(repository: Arc<dyn MembershipRepository>) -> Self {
        Self { repository }
    }

    pub async fn join(&self, event_id: &str, user_uid: &str) -> Result<(), AppError> {
        self.repository.join_event(event_id, user_uid).await?;
        info!(%event_id, %user_uid, "user joined event");
        Ok(())
    }

    pub async fn leave(&self, event_id: &str, user_uid: &str) -> Result<(), AppError> {
        self.repository.leave_event(event_id, user_uid).await?;
        info!(%event_id, %user_uid, "user left event");
        Ok(())
    }

    pub async fn participants(&self, event_id: &str) -> Result<Vec<String>, AppError> {
        self.repository.participants(event_id).await
    }
}
