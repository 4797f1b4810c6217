use super::ConnectionPool;
use crate::shared::config::RetryConfig;
use crate::shared::error::AppError;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

mod events;
mod mapper;
mod memberships;
mod profiles;
mod queries;
mod ratings;

pub struct SqliteRepository {
    pool: ConnectionPool,
    retry: RetryConfig,
}

impl SqliteRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            pool,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry(pool: ConnectionPool, retry: RetryConfig) -> Self {
        Self { pool, retry }
    }

    pub async fn initialize(&self) -> Result<(), AppError> {
        self.pool.migrate().await?;
        Ok(())
    }

    pub async fn health_check(&self) -> Result<bool, AppError> {
        let result = sqlx::query("SELECT 1")
            .fetch_one(self.pool.get_pool())
            .await;
        Ok(result.is_ok())
    }

    /// Runs a write transaction, retrying on lock conflicts with a linear
    /// backoff. Exhaustion surfaces the final `TransientConflict`.
    pub(super) async fn retry_write<T, F, Fut>(&self, mut op: F) -> Result<T, AppError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let mut attempts = 0u32;
        loop {
            match op().await {
                Err(AppError::TransientConflict(reason)) => {
                    attempts += 1;
                    if attempts >= self.retry.max_attempts {
                        return Err(AppError::TransientConflict(reason));
                    }
                    debug!(attempts, %reason, "write conflicted, retrying");
                    tokio::time::sleep(Duration::from_millis(
                        self.retry.backoff_ms * u64::from(attempts),
                    ))
                    .await;
                }
                other => return other,
            }
        }
    }
}
