//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/`; `/health` sits outside the prefix.
//! Middleware: CORS, tracing.

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Presets
        .route("/presets", get(handlers::presets::list_presets))
        .route(
            "/presets/{index}/select",
            post(handlers::presets::select_preset),
        )
        // Session
        .route("/session", get(handlers::session::get_session))
        .route("/prompt", put(handlers::session::set_prompt))
        // Generation
        .route("/generate", post(handlers::generate::generate))
        // Builds
        .route("/builds/current", get(handlers::builds::get_current))
        .route("/builds/history", get(handlers::builds::list_history))
        .route(
            "/builds/current/export",
            post(handlers::builds::export_current),
        )
        // Schema
        .route("/schema", get(handlers::schema::get_schema));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
