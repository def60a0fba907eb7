//! Build schema handler.

use axum::Json;
use axum::extract::Query;
use serde::Deserialize;

use architect_core::schema::{build_json_schema, build_shape};

use crate::http::response::{ApiResponse, RequestTimer};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SchemaQuery {
    /// Return the response constraint sent to Gemini instead of the
    /// published JSON Schema.
    pub remote: bool,
}

/// GET /api/v1/schema
pub async fn get_schema(Query(query): Query<SchemaQuery>) -> Json<ApiResponse<serde_json::Value>> {
    let timer = RequestTimer::start();
    let schema = if query.remote {
        build_shape().to_response_schema()
    } else {
        build_json_schema()
    };
    Json(timer.success(schema).with_link("self", "/api/v1/schema"))
}
