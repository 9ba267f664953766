//! Progress Upsert Engine.
//!
//! One record per (user, content): the first update inserts, later ones
//! overwrite `completed` and `feedback` in place (last write wins).

use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::progress::{ProgressRecord, ProgressWrite};
use crate::store::ProgressStore;

/// Longest content id stored, in characters. Matches `VARCHAR(255)`.
pub const MAX_CONTENT_ID_CHARS: usize = 255;

/// Cuts `content_id` to its first `MAX_CONTENT_ID_CHARS` characters.
///
/// Runs before the uniqueness lookup, so ids that only differ past the limit
/// land on the same record.
pub fn truncate_content_id(content_id: &str) -> &str {
    match content_id.char_indices().nth(MAX_CONTENT_ID_CHARS) {
        Some((byte_idx, _)) => &content_id[..byte_idx],
        None => content_id,
    }
}

/// Validates the input and writes it through the store's atomic upsert.
///
/// `completed` defaults to false; a missing `feedback` clears any previous value.
pub async fn upsert_progress(
    store: &dyn ProgressStore,
    user_id: Option<Uuid>,
    content_id: Option<&str>,
    completed: Option<bool>,
    feedback: Option<i32>,
) -> Result<ProgressRecord, AppError> {
    let user_id = user_id.filter(|id| !id.is_nil());
    let content_id = content_id.filter(|c| !c.is_empty());
    let (Some(user_id), Some(content_id)) = (user_id, content_id) else {
        return Err(AppError::Validation(
            "user_id and content_id are required".to_string(),
        ));
    };

    let normalized = truncate_content_id(content_id);
    if normalized.len() < content_id.len() {
        debug!("Truncated content_id for user {user_id} to {MAX_CONTENT_ID_CHARS} characters");
    }

    let write = ProgressWrite {
        user_id,
        content_id: normalized.to_string(),
        completed: completed.unwrap_or(false),
        feedback,
    };
    let record = store.upsert_progress(&write).await?;

    debug!(
        "Progress for user {user_id} on '{}': completed={}, feedback={:?}",
        record.content_id, record.completed, record.feedback
    );
    Ok(record)
}
