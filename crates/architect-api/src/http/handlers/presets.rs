//! Preset prompt handlers. Indices are zero-based.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use architect_core::session::PRESETS;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PresetEntry {
    pub index: usize,
    pub prompt: &'static str,
}

/// GET /api/v1/presets
pub async fn list_presets() -> Json<ApiResponse<Vec<PresetEntry>>> {
    let timer = RequestTimer::start();
    let presets = PRESETS
        .iter()
        .enumerate()
        .map(|(index, &prompt)| PresetEntry { index, prompt })
        .collect();
    Json(timer.success(presets).with_link("self", "/api/v1/presets"))
}

/// POST /api/v1/presets/{index}/select - Fill the prompt input. Never submits.
pub async fn select_preset(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ApiResponse<PresetEntry>>, AppError> {
    let timer = RequestTimer::start();
    let prompt = state
        .session
        .select_preset(index)
        .ok_or_else(|| AppError::Validation(format!("Preset {index} does not exist (0-{})", PRESETS.len() - 1)))?;

    Ok(Json(
        timer
            .success(PresetEntry { index, prompt })
            .with_link("session", "/api/v1/session"),
    ))
}
