use thiserror::Error;

/// Message shown to the user for every failed generation attempt,
/// whatever the underlying cause.
pub const GENERATION_FAILURE_MESSAGE: &str =
    "Failed to manifest build. The Depths are turbulent. Ensure your prompt is detailed.";

/// Structural problems found while validating a remote build document.
///
/// Every variant carries the path of the offending field in wire notation,
/// e.g. `preShrineStats.strength` or `progressionOrder[2].level`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field '{path}'")]
    MissingField { path: String },

    #[error("field '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field '{path}': {value} is not a whole number")]
    NotWholeNumber { path: String, value: String },

    #[error("field '{path}': {value} is out of range")]
    OutOfRange { path: String, value: String },

    #[error("document could not be decoded as a build: {message}")]
    Decode { path: String, message: String },
}

impl ValidationError {
    /// Path of the field that failed validation.
    pub fn path(&self) -> &str {
        match self {
            ValidationError::MissingField { path }
            | ValidationError::TypeMismatch { path, .. }
            | ValidationError::NotWholeNumber { path, .. }
            | ValidationError::OutOfRange { path, .. }
            | ValidationError::Decode { path, .. } => path,
        }
    }
}

/// Errors from a generation attempt.
///
/// All variants collapse into [`GENERATION_FAILURE_MESSAGE`] at the user
/// boundary; [`GenerationError::kind`] keeps the cause for diagnostics.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] ValidationError),

    #[error("build generation failed: {0}")]
    GenerationFailed(String),

    #[error("image generation failed: {0}")]
    ImageGenerationFailed(String),
}

impl GenerationError {
    /// Stable machine-readable name of the failure cause.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::EmptyPrompt => "empty_prompt",
            GenerationError::MalformedResponse(_) => "malformed_response",
            GenerationError::GenerationFailed(_) => "generation_failed",
            GenerationError::ImageGenerationFailed(_) => "image_generation_failed",
        }
    }

    /// The message the user sees.
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILURE_MESSAGE
    }
}

/// Errors writing to a clipboard. Callers treat these as a silent no-op.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,

    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Errors resolving the remote-service credential.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("no API key found (checked: {checked})")]
    NotFound { checked: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_path() {
        let err = ValidationError::MissingField {
            path: "mantras".to_string(),
        };
        assert_eq!(err.path(), "mantras");
        assert_eq!(err.to_string(), "missing required field 'mantras'");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = ValidationError::TypeMismatch {
            path: "preShrineStats.strength".to_string(),
            expected: "integer",
            found: "string",
        };
        assert_eq!(
            err.to_string(),
            "field 'preShrineStats.strength': expected integer, found string"
        );
    }

    #[test]
    fn test_generation_error_kinds() {
        assert_eq!(GenerationError::EmptyPrompt.kind(), "empty_prompt");
        let malformed: GenerationError = ValidationError::MissingField {
            path: "name".to_string(),
        }
        .into();
        assert_eq!(malformed.kind(), "malformed_response");
        assert_eq!(
            GenerationError::ImageGenerationFailed("no image".to_string()).kind(),
            "image_generation_failed"
        );
    }

    #[test]
    fn test_every_kind_shares_user_message() {
        let errors = [
            GenerationError::EmptyPrompt,
            GenerationError::GenerationFailed("timeout".to_string()),
            GenerationError::ImageGenerationFailed("empty".to_string()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), GENERATION_FAILURE_MESSAGE);
        }
    }
}
