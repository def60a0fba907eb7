//! Build generation handler.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use architect_core::presentation::BuildView;
use architect_core::session::SubmitOutcome;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateBody {
    /// Replaces the prompt input before submitting. Omit to submit the
    /// current input.
    pub prompt: Option<String>,
}

/// POST /api/v1/generate - Run one attempt and return the new build.
///
/// The attempt runs on its own task so a disconnected client does not
/// cancel it; the result still lands in history.
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> Result<Json<ApiResponse<BuildView>>, AppError> {
    let timer = RequestTimer::start();
    // Submit this request's own prompt, never whatever the shared input
    // holds once the task runs.
    let prompt = match body.prompt {
        Some(prompt) => {
            state.session.set_prompt(prompt.clone());
            prompt
        }
        None => state.session.prompt(),
    };

    let session = state.session.clone();
    let generator = Arc::clone(&state.generator);
    let outcome = tokio::spawn(async move { session.submit(&prompt, generator.as_ref()).await })
        .await
        .map_err(|e| AppError::Internal(format!("generation task failed: {e}")))?;

    match outcome {
        SubmitOutcome::Succeeded(build) => Ok(Json(
            timer
                .success(BuildView::from_build(&build))
                .with_link("self", "/api/v1/builds/current")
                .with_link("export", "/api/v1/builds/current/export"),
        )),
        SubmitOutcome::Rejected => Err(AppError::Validation("Prompt is empty".to_string())),
        SubmitOutcome::Ignored => Err(AppError::GenerationInProgress),
        SubmitOutcome::Failed(e) => Err(e.into()),
    }
}
