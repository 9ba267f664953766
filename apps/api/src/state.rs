use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::store::{ProgressStore, UserStore};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Collaborators are trait objects so tests can swap in the in-memory store
/// and a stub generator.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub progress: Arc<dyn ProgressStore>,
    pub llm: Arc<dyn TextGenerator>,
}
