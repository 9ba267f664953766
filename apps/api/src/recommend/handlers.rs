//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::recommend::extractor::{Extraction, Suggestion};
use crate::recommend::recommend_content;
use crate::state::AppState;

const SUGGESTED_MESSAGE: &str = "Here are some suggested learning resources";
const NO_SUGGESTIONS_MESSAGE: &str =
    "The AI could not produce suggestions. Please try a different keyword.";

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub user_id: Option<Uuid>,
    pub interest: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub message: &'static str,
    pub suggestions: Vec<Suggestion>,
}

/// POST /recommend_content
///
/// An empty extraction is still a 200, with a message asking for another query.
pub async fn handle_recommend(
    State(state): State<AppState>,
    AppJson(req): AppJson<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let outcome =
        recommend_content(state.llm.as_ref(), req.user_id, req.interest.as_deref()).await?;

    let message = match outcome {
        Extraction::Found(_) => SUGGESTED_MESSAGE,
        Extraction::Empty => NO_SUGGESTIONS_MESSAGE,
    };
    Ok(Json(RecommendResponse {
        message,
        suggestions: outcome.into_suggestions(),
    }))
}
