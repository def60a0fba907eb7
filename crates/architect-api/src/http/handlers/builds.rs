//! Current build, history and export handlers.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use architect_core::presentation::BuildView;
use architect_core::session::{Clipboard, CopyOutcome};
use architect_types::error::ClipboardError;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// The HTTP client owns the real clipboard; the server only hands back
/// the text and runs the confirmation window.
struct ClientClipboard;

impl Clipboard for ClientClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportView {
    pub export_summary: String,
    pub copied: bool,
}

/// GET /api/v1/builds/current
pub async fn get_current(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BuildView>>, AppError> {
    let timer = RequestTimer::start();
    let build = state
        .session
        .current()
        .ok_or_else(|| AppError::NotFound("No build generated yet".to_string()))?;

    Ok(Json(
        timer
            .success(BuildView::from_build(&build))
            .with_link("self", "/api/v1/builds/current")
            .with_link("export", "/api/v1/builds/current/export"),
    ))
}

/// GET /api/v1/builds/history - Newest first, at most five.
pub async fn list_history(State(state): State<AppState>) -> Json<ApiResponse<Vec<BuildView>>> {
    let timer = RequestTimer::start();
    let views = state.session.history().iter().map(BuildView::from_build).collect();
    Json(timer.success(views).with_link("self", "/api/v1/builds/history"))
}

/// POST /api/v1/builds/current/export - Start the copy confirmation and
/// return the export text verbatim.
pub async fn export_current(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ExportView>>, AppError> {
    let timer = RequestTimer::start();
    match state.session.copy_export(&ClientClipboard) {
        CopyOutcome::Copied(export_summary) => Ok(Json(timer.success(ExportView {
            export_summary,
            copied: true,
        }))),
        CopyOutcome::NoBuild => Err(AppError::NotFound("No build generated yet".to_string())),
        CopyOutcome::ClipboardFailed => Err(AppError::Internal("Clipboard write failed".to_string())),
    }
}
