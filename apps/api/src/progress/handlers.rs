use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::progress::upsert::upsert_progress;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProgressRequest {
    pub user_id: Option<Uuid>,
    pub content_id: Option<String>,
    pub completed: Option<bool>,
    pub feedback: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProgressResponse {
    pub message: &'static str,
    /// The id as stored, after truncation.
    pub content_id: String,
}

/// Read-only projection of one progress record.
#[derive(Debug, Serialize)]
pub struct ProgressEntry {
    pub content_id: String,
    pub completed: bool,
    pub feedback: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ProgressListResponse {
    pub progress: Vec<ProgressEntry>,
}

/// POST /update_progress
pub async fn handle_update_progress(
    State(state): State<AppState>,
    AppJson(req): AppJson<UpdateProgressRequest>,
) -> Result<Json<UpdateProgressResponse>, AppError> {
    let record = upsert_progress(
        state.progress.as_ref(),
        req.user_id,
        req.content_id.as_deref(),
        req.completed,
        req.feedback,
    )
    .await?;

    Ok(Json(UpdateProgressResponse {
        message: "Learning progress updated",
        content_id: record.content_id,
    }))
}

/// GET /get_progress/:user_id
///
/// Unknown users simply have no progress.
pub async fn handle_get_progress(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<Uuid>,
) -> Result<Json<ProgressListResponse>, AppError> {
    let progress = state
        .progress
        .list_progress(user_id)
        .await?
        .into_iter()
        .map(|p| ProgressEntry {
            content_id: p.content_id,
            completed: p.completed,
            feedback: p.feedback,
        })
        .collect();

    Ok(Json(ProgressListResponse { progress }))
}
