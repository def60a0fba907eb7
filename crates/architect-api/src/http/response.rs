//! Envelope response format for all API responses.
//!
//! ```json
//! {
//!   "data": { ... },
//!   "meta": { "request_id": "...", "timestamp": "...", "response_time_ms": 5 },
//!   "errors": [],
//!   "_links": { "self": "..." }
//! }
//! ```

use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    pub meta: ApiMeta,

    /// Empty on success.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiErrorDetail>,

    #[serde(rename = "_links", skip_serializing_if = "HashMap::is_empty")]
    pub links: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct ApiMeta {
    pub request_id: String,
    /// RFC 3339.
    pub timestamp: String,
    pub response_time_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code.
    pub code: String,
    pub message: String,
}

/// Request id and start time for one handler invocation.
pub struct RequestTimer {
    request_id: String,
    start: Instant,
}

impl RequestTimer {
    pub fn start() -> Self {
        Self {
            request_id: uuid::Uuid::now_v7().to_string(),
            start: Instant::now(),
        }
    }

    /// Wrap `data` in a success envelope stamped with this request's timing.
    pub fn success<T: Serialize>(self, data: T) -> ApiResponse<T> {
        let elapsed = self.start.elapsed().as_millis() as u64;
        ApiResponse::success(data, self.request_id, elapsed)
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, request_id: String, response_time_ms: u64) -> Self {
        Self {
            data: Some(data),
            meta: ApiMeta {
                request_id,
                timestamp: chrono::Utc::now().to_rfc3339(),
                response_time_ms,
            },
            errors: Vec::new(),
            links: HashMap::new(),
        }
    }

    pub fn with_link(mut self, rel: &str, href: &str) -> Self {
        self.links.insert(rel.to_string(), href.to_string());
        self
    }
}

impl ApiResponse<()> {
    pub fn error(code: &str, message: &str, request_id: String, response_time_ms: u64) -> Self {
        Self {
            data: None,
            meta: ApiMeta {
                request_id,
                timestamp: chrono::Utc::now().to_rfc3339(),
                response_time_ms,
            },
            errors: vec![ApiErrorDetail {
                code: code.to_string(),
                message: message.to_string(),
            }],
            links: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_omits_errors() {
        let resp = RequestTimer::start()
            .success(serde_json::json!({ "ok": true }))
            .with_link("self", "/api/v1/session");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["data"]["ok"], true);
        assert!(value.get("errors").is_none());
        assert_eq!(value["_links"]["self"], "/api/v1/session");
        assert!(!value["meta"]["request_id"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let resp = ApiResponse::error("NOT_FOUND", "No build yet", "req".to_string(), 0);
        let value = serde_json::to_value(&resp).unwrap();
        assert!(value.get("data").is_none());
        assert_eq!(value["errors"][0]["code"], "NOT_FOUND");
        assert_eq!(value["errors"][0]["message"], "No build yet");
    }
}
