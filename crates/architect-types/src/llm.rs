//! Generative-service request/response types.
//!
//! Provider-agnostic shapes for a single content-generation call. The Gemini
//! adapter in `architect-infra` translates these to and from its wire format.

use serde::{Deserialize, Serialize};

/// Square output, the only aspect ratio requested for illustrations.
pub const SQUARE_ASPECT_RATIO: &str = "1:1";

/// What kind of output a content request asks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputConfig {
    /// Plain text, no constraints.
    Text,

    /// A JSON document constrained by a schema in the service's dialect.
    Json { schema: serde_json::Value },

    /// An image with the given aspect ratio.
    Image { aspect_ratio: String },
}

/// A single generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRequest {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
    pub prompt: String,
    pub output: OutputConfig,
}

/// One part of a generation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    /// Binary payload, base64-encoded as received.
    InlineData { mime_type: String, data: String },
}

/// Token usage reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Response to a [`ContentRequest`]: the parts of the first candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentResponse {
    pub model: String,
    pub parts: Vec<ContentPart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub usage: Usage,
}

impl ContentResponse {
    /// Concatenation of all text parts, in order.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text { text } => Some(text.as_str()),
                ContentPart::InlineData { .. } => None,
            })
            .collect()
    }

    /// The first part carrying inline bytes, as `(mime_type, base64_data)`.
    pub fn first_inline_data(&self) -> Option<(&str, &str)> {
        self.parts.iter().find_map(|part| match part {
            ContentPart::InlineData { mime_type, data } => Some((mime_type.as_str(), data.as_str())),
            ContentPart::Text { .. } => None,
        })
    }

    /// The first inline part that is an image. A part with no MIME type
    /// counts; any other non-`image/` payload is skipped.
    pub fn first_image_data(&self) -> Option<(&str, &str)> {
        self.parts.iter().find_map(|part| match part {
            ContentPart::InlineData { mime_type, data }
                if mime_type.is_empty() || mime_type.starts_with("image/") =>
            {
                Some((mime_type.as_str(), data.as_str()))
            }
            _ => None,
        })
    }
}

/// Errors from generative-service operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(parts: Vec<ContentPart>) -> ContentResponse {
        ContentResponse {
            model: "test-model".to_string(),
            parts,
            finish_reason: None,
            usage: Usage::default(),
        }
    }

    #[test]
    fn test_text_joins_text_parts_only() {
        let resp = response(vec![
            ContentPart::Text {
                text: "{\"a\":".to_string(),
            },
            ContentPart::InlineData {
                mime_type: "image/png".to_string(),
                data: "AAAA".to_string(),
            },
            ContentPart::Text {
                text: "1}".to_string(),
            },
        ]);
        assert_eq!(resp.text(), "{\"a\":1}");
    }

    #[test]
    fn test_first_inline_data_skips_text() {
        let resp = response(vec![
            ContentPart::Text {
                text: "Here is your image".to_string(),
            },
            ContentPart::InlineData {
                mime_type: "image/jpeg".to_string(),
                data: "first".to_string(),
            },
            ContentPart::InlineData {
                mime_type: "image/png".to_string(),
                data: "second".to_string(),
            },
        ]);
        assert_eq!(resp.first_inline_data(), Some(("image/jpeg", "first")));
    }

    #[test]
    fn test_first_image_data_skips_non_image_payloads() {
        let resp = response(vec![
            ContentPart::InlineData {
                mime_type: "application/json".to_string(),
                data: "e30=".to_string(),
            },
            ContentPart::InlineData {
                mime_type: "image/webp".to_string(),
                data: "picture".to_string(),
            },
        ]);
        assert_eq!(resp.first_inline_data(), Some(("application/json", "e30=")));
        assert_eq!(resp.first_image_data(), Some(("image/webp", "picture")));
    }

    #[test]
    fn test_first_inline_data_none() {
        let resp = response(vec![ContentPart::Text {
            text: "sorry".to_string(),
        }]);
        assert!(resp.first_inline_data().is_none());
    }

    #[test]
    fn test_output_config_serde_tag() {
        let config = OutputConfig::Image {
            aspect_ratio: SQUARE_ASPECT_RATIO.to_string(),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["aspect_ratio"], "1:1");
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "HTTP 500".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: HTTP 500");
    }
}
