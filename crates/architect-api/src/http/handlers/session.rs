//! Session state and prompt input handlers.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use architect_core::presentation::BuildView;
use architect_core::session::{SessionSnapshot, Status};

use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// What a client polls to render the dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub status: Status,
    pub loading_message: Option<&'static str>,
    pub error: Option<&'static str>,
    pub copied: bool,
    pub prompt: String,
    pub current: Option<BuildView>,
    pub history_len: usize,
}

impl From<SessionSnapshot> for SessionView {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            status: snapshot.status,
            loading_message: snapshot.loading_message,
            error: snapshot.error,
            copied: snapshot.copied,
            prompt: snapshot.prompt,
            current: snapshot.current.as_ref().map(BuildView::from_build),
            history_len: snapshot.history_len,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PromptBody {
    pub prompt: String,
}

/// GET /api/v1/session
pub async fn get_session(State(state): State<AppState>) -> Json<ApiResponse<SessionView>> {
    let timer = RequestTimer::start();
    let view = SessionView::from(state.session.snapshot());
    Json(timer.success(view).with_link("self", "/api/v1/session"))
}

/// PUT /api/v1/prompt - Replace the prompt input.
pub async fn set_prompt(
    State(state): State<AppState>,
    Json(body): Json<PromptBody>,
) -> Json<ApiResponse<SessionView>> {
    let timer = RequestTimer::start();
    state.session.set_prompt(body.prompt);
    let view = SessionView::from(state.session.snapshot());
    Json(timer.success(view).with_link("self", "/api/v1/session"))
}
