use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::models::progress::{ProgressRecord, ProgressWrite};
use crate::models::user::User;
use crate::store::{ProgressStore, StoreError, UserStore};

/// PostgreSQL-backed store over the `users` and `learning_progress` tables.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert_user(&self, username: &str, credential: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, credential) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(credential)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }
}

#[async_trait]
impl ProgressStore for PgStore {
    async fn upsert_progress(&self, write: &ProgressWrite) -> Result<ProgressRecord, StoreError> {
        // Single statement: the unique constraint arbitrates concurrent writers,
        // so there is no lookup-then-insert window.
        let record = sqlx::query_as::<_, ProgressRecord>(
            r#"
            INSERT INTO learning_progress (id, user_id, content_id, completed, feedback)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, content_id) DO UPDATE
                SET completed = EXCLUDED.completed,
                    feedback = EXCLUDED.feedback
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(write.user_id)
        .bind(&write.content_id)
        .bind(write.completed)
        .bind(write.feedback)
        .fetch_one(&self.pool)
        .await?;

        debug!(
            "Upserted learning_progress row {} for user {}",
            record.id, record.user_id
        );
        Ok(record)
    }

    async fn list_progress(&self, user_id: Uuid) -> Result<Vec<ProgressRecord>, StoreError> {
        let records = sqlx::query_as::<_, ProgressRecord>(
            "SELECT * FROM learning_progress WHERE user_id = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }
}
