use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account. Never updated or deleted by the service.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Compared for equality at login; stored as given.
    pub credential: String,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}
