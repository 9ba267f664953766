// Content recommendations: prompt the model, extract suggestion lines.
// All model calls go through llm_client::TextGenerator.

pub mod extractor;
pub mod handlers;
pub mod prompts;

use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::recommend::extractor::{extract, Extraction};
use crate::recommend::prompts::build_recommend_prompt;

/// Asks the model for resources on `interest` and extracts the suggestion lines.
///
/// Model failures become `ServiceUnavailable`; a reply with no usable lines is
/// `Ok(Extraction::Empty)`.
pub async fn recommend_content(
    llm: &dyn TextGenerator,
    user_id: Option<Uuid>,
    interest: Option<&str>,
) -> Result<Extraction, AppError> {
    let interest = interest.map(str::trim).filter(|i| !i.is_empty());
    let user_id = user_id.filter(|id| !id.is_nil());
    let (Some(user_id), Some(interest)) = (user_id, interest) else {
        return Err(AppError::Validation(
            "interest and user_id are required".to_string(),
        ));
    };

    let prompt = build_recommend_prompt(interest);
    let raw = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::ServiceUnavailable(e.to_string()))?;

    let extraction = extract(&raw);
    match &extraction {
        Extraction::Found(suggestions) => info!(
            "Extracted {} suggestions for user {user_id}",
            suggestions.len()
        ),
        Extraction::Empty => warn!("Model reply for user {user_id} contained no suggestion lines"),
    }
    Ok(extraction)
}
