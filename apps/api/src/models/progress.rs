use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// One row of `learning_progress`. Unique per (`user_id`, `content_id`).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProgressRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_id: String,
    pub completed: bool,
    /// Expected 1-5, stored as received.
    pub feedback: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Values written by a progress upsert. `content_id` is already normalised.
#[derive(Debug, Clone)]
pub struct ProgressWrite {
    pub user_id: Uuid,
    pub content_id: String,
    pub completed: bool,
    pub feedback: Option<i32>,
}
