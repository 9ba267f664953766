//! The only place that talks to the relational store.
//!
//! Services depend on the `UserStore` / `ProgressStore` traits; `AppState`
//! carries them as `Arc<dyn …>` so tests can run against `MemoryStore`.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::progress::{ProgressRecord, ProgressWrite};
use crate::models::user::User;

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[cfg(test)]
pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                return StoreError::UniqueViolation(
                    db_err.constraint().unwrap_or("unknown").to_string(),
                );
            }
            if db_err.is_foreign_key_violation() {
                return StoreError::ForeignKeyViolation(
                    db_err.constraint().unwrap_or("unknown").to_string(),
                );
            }
        }
        StoreError::Database(e)
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Inserts a new user. Fails with `UniqueViolation` if the username is taken.
    async fn insert_user(&self, username: &str, credential: &str) -> Result<User, StoreError>;
}

#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Atomic insert-or-update keyed by (`user_id`, `content_id`).
    /// On an existing row `completed` and `feedback` are overwritten, never merged.
    /// Fails with `ForeignKeyViolation` when `user_id` is not a registered user.
    async fn upsert_progress(&self, write: &ProgressWrite) -> Result<ProgressRecord, StoreError>;

    async fn list_progress(&self, user_id: Uuid) -> Result<Vec<ProgressRecord>, StoreError>;
}
