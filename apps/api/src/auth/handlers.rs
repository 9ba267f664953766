use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{login, register};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// Body for both `/register` and `/login`. `password` is the stored credential.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user_id: Uuid,
    pub username: String,
}

/// POST /register
pub async fn handle_register(
    State(state): State<AppState>,
    AppJson(req): AppJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let user = register(
        state.users.as_ref(),
        req.username.as_deref(),
        req.password.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration complete",
            user_id: user.id,
        }),
    ))
}

/// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(req): AppJson<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = login(
        state.users.as_ref(),
        req.username.as_deref(),
        req.password.as_deref(),
    )
    .await?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        user_id: user.id,
        username: user.username,
    }))
}
