pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::progress::handlers as progress;
use crate::recommend::handlers as recommend;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Accounts
        .route("/register", post(auth::handle_register))
        .route("/login", post(auth::handle_login))
        // Recommendations
        .route("/recommend_content", post(recommend::handle_recommend))
        // Learning progress
        .route("/update_progress", post(progress::handle_update_progress))
        .route(
            "/get_progress/:user_id",
            get(progress::handle_get_progress),
        )
        .with_state(state)
}
