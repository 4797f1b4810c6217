use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Event has ended: {0}")]
    EventEnded(String),

    #[error("Event is full: {0}")]
    EventFull(String),

    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    #[error("Transient conflict: {0}")]
    TransientConflict(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// SQLITE_BUSY (5) and SQLITE_LOCKED (6), including their extended codes.
fn is_lock_contention(code: &str) -> bool {
    matches!(code.parse::<u64>().map(|c| c & 0xff), Ok(5) | Ok(6))
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db)
                if db.code().as_deref().is_some_and(is_lock_contention) =>
            {
                AppError::TransientConflict(err.to_string())
            }
            sqlx::Error::Io(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => AppError::StoreUnavailable(err.to_string()),
            sqlx::Error::RowNotFound => AppError::NotFound(err.to_string()),
            other => AppError::Database(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_contention_covers_extended_codes() {
        assert!(is_lock_contention("5"));
        assert!(is_lock_contention("6"));
        // SQLITE_BUSY_SNAPSHOT and SQLITE_LOCKED_SHAREDCACHE
        assert!(is_lock_contention("517"));
        assert!(is_lock_contention("262"));
        assert!(!is_lock_contention("1"));
        assert!(!is_lock_contention("not a code"));
    }
}
