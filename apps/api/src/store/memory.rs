//! In-process store used by the test suite. One mutex guards both tables,
//! which gives the upsert the same atomicity as the SQL `ON CONFLICT` path.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::progress::{ProgressRecord, ProgressWrite};
use crate::models::user::User;
use crate::store::{ProgressStore, StoreError, UserStore};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    progress: Vec<ProgressRecord>,
    progress_index: HashMap<(Uuid, String), usize>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self, username: &str) -> usize {
        let tables = self.tables.lock().await;
        tables.users.iter().filter(|u| u.username == username).count()
    }

    pub async fn progress_count(&self, user_id: Uuid, content_id: &str) -> usize {
        let tables = self.tables.lock().await;
        tables
            .progress
            .iter()
            .filter(|p| p.user_id == user_id && p.content_id == content_id)
            .count()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn insert_user(&self, username: &str, credential: &str) -> Result<User, StoreError> {
        let mut tables = self.tables.lock().await;
        if tables.users.iter().any(|u| u.username == username) {
            return Err(StoreError::UniqueViolation("users_username_key".to_string()));
        }
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            credential: credential.to_string(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl ProgressStore for MemoryStore {
    async fn upsert_progress(&self, write: &ProgressWrite) -> Result<ProgressRecord, StoreError> {
        let mut tables = self.tables.lock().await;
        if !tables.users.iter().any(|u| u.id == write.user_id) {
            return Err(StoreError::ForeignKeyViolation(
                "learning_progress_user_id_fkey".to_string(),
            ));
        }
        let key = (write.user_id, write.content_id.clone());

        let existing = tables.progress_index.get(&key).copied();
        if let Some(idx) = existing {
            let record = &mut tables.progress[idx];
            record.completed = write.completed;
            record.feedback = write.feedback;
            return Ok(record.clone());
        }

        let record = ProgressRecord {
            id: Uuid::new_v4(),
            user_id: write.user_id,
            content_id: write.content_id.clone(),
            completed: write.completed,
            feedback: write.feedback,
            created_at: Utc::now(),
        };
        let idx = tables.progress.len();
        tables.progress.push(record.clone());
        tables.progress_index.insert(key, idx);
        Ok(record)
    }

    async fn list_progress(&self, user_id: Uuid) -> Result<Vec<ProgressRecord>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .progress
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }
}
