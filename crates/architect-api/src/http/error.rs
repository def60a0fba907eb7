//! Application error type mapping to HTTP status codes and envelope format.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use architect_types::error::{GENERATION_FAILURE_MESSAGE, GenerationError};

use super::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    NotFound(String),
    /// A submit arrived while another attempt was loading.
    GenerationInProgress,
    /// The attempt failed. The session has already logged the cause; it is
    /// never sent to the client.
    GenerationFailed(GenerationError),
    Internal(String),
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        AppError::GenerationFailed(e)
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::GenerationInProgress => (
                StatusCode::CONFLICT,
                "GENERATION_IN_PROGRESS",
                "A build is already being generated".to_string(),
            ),
            AppError::GenerationFailed(_) => (
                StatusCode::BAD_GATEWAY,
                "GENERATION_FAILED",
                GENERATION_FAILURE_MESSAGE.to_string(),
            ),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = ApiResponse::error(code, &message, uuid::Uuid::now_v7().to_string(), 0);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failure_hides_cause() {
        let err = AppError::from(GenerationError::GenerationFailed("HTTP 500: boom".to_string()));
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "GENERATION_FAILED");
        assert_eq!(message, GENERATION_FAILURE_MESSAGE);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Validation(String::new()).parts().0, StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound(String::new()).parts().0, StatusCode::NOT_FOUND);
        assert_eq!(AppError::GenerationInProgress.parts().0, StatusCode::CONFLICT);
        assert_eq!(
            AppError::Internal(String::new()).parts().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
