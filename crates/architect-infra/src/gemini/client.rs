//! GeminiProvider -- concrete [`GenerativeBackend`] for the Generative
//! Language REST API.
//!
//! The API key is held as a [`SecretString`] and only exposed when building
//! the request header.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::{Instrument, field, info_span};

use architect_core::llm::GenerativeBackend;
use architect_observe::genai_attrs::{
    GEN_AI_RESPONSE_FINISH_REASONS, GEN_AI_USAGE_INPUT_TOKENS, GEN_AI_USAGE_OUTPUT_TOKENS,
    PROVIDER_GEMINI,
};
use architect_types::llm::{
    ContentPart, ContentRequest, ContentResponse, LlmError, OutputConfig, Usage,
};

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini generative backend.
///
/// One provider serves both the text and the image model; the model is
/// chosen per request.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

// No Debug: the struct holds the API key.

impl GeminiProvider {
    pub fn new(api_key: SecretString, timeout: Duration) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the API root (proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{model}:generateContent",
            self.base_url.trim_end_matches('/')
        )
    }

    fn to_gemini_request(request: &ContentRequest) -> GenerateContentRequest {
        let generation_config = match &request.output {
            OutputConfig::Text => None,
            OutputConfig::Json { schema } => Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema.clone()),
                image_config: None,
            }),
            OutputConfig::Image { aspect_ratio } => Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: aspect_ratio.clone(),
                }),
                ..Default::default()
            }),
        };

        GenerateContentRequest {
            contents: vec![Content::text(Some("user"), request.prompt.clone())],
            system_instruction: request
                .system_instruction
                .as_ref()
                .map(|text| Content::text(None, text.clone())),
            generation_config,
        }
    }

    fn from_gemini_response(
        requested_model: &str,
        response: GenerateContentResponse,
    ) -> Result<ContentResponse, LlmError> {
        let Some(candidate) = response.candidates.into_iter().next() else {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(LlmError::Provider {
                message: format!("response contained no candidates: {reason}"),
            });
        };

        let parts = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| match (part.inline_data, part.text) {
                (Some(inline), _) => Some(ContentPart::InlineData {
                    mime_type: inline.mime_type,
                    data: inline.data,
                }),
                (None, Some(text)) => Some(ContentPart::Text { text }),
                (None, None) => None,
            })
            .collect();

        let usage = response
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        Ok(ContentResponse {
            model: response
                .model_version
                .unwrap_or_else(|| requested_model.to_string()),
            parts,
            finish_reason: candidate.finish_reason,
            usage,
        })
    }
}

impl GenerativeBackend for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER_GEMINI
    }

    async fn generate_content(&self, request: &ContentRequest) -> Result<ContentResponse, LlmError> {
        let span = info_span!(
            "gen_ai.generate_content",
            gen_ai.provider.name = PROVIDER_GEMINI,
            gen_ai.request.model = %request.model,
            gen_ai.usage.input_tokens = field::Empty,
            gen_ai.usage.output_tokens = field::Empty,
            gen_ai.response.finish_reasons = field::Empty,
        );

        async {
            let body = Self::to_gemini_request(request);
            let response = self
                .client
                .post(self.url(&request.model))
                .header("x-goog-api-key", self.api_key.expose_secret())
                .json(&body)
                .send()
                .await
                .map_err(|e| LlmError::Provider {
                    message: format!("HTTP request failed: {e}"),
                })?;

            let status = response.status();
            if !status.is_success() {
                let error_body = response.text().await.unwrap_or_default();
                tracing::debug!(%status, "Gemini request rejected");
                return Err(match status.as_u16() {
                    401 | 403 => LlmError::AuthenticationFailed,
                    429 => LlmError::RateLimited {
                        retry_after_ms: None,
                    },
                    400 => LlmError::InvalidRequest(error_body),
                    _ => LlmError::Provider {
                        message: format!("HTTP {status}: {error_body}"),
                    },
                });
            }

            let gemini_resp: GenerateContentResponse = response.json().await.map_err(|e| {
                LlmError::Deserialization(format!("failed to parse response: {e}"))
            })?;
            let content = Self::from_gemini_response(&request.model, gemini_resp)?;

            let span = tracing::Span::current();
            span.record(GEN_AI_USAGE_INPUT_TOKENS, content.usage.input_tokens);
            span.record(GEN_AI_USAGE_OUTPUT_TOKENS, content.usage.output_tokens);
            if let Some(reason) = &content.finish_reason {
                span.record(GEN_AI_RESPONSE_FINISH_REASONS, reason.as_str());
            }
            Ok(content)
        }
        .instrument(span)
        .await
    }
}
