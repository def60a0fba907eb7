//! GenerativeBackend trait definition.

use architect_types::llm::{ContentRequest, ContentResponse, LlmError};

/// A remote content-generation service (text or image).
///
/// Implementations live in architect-infra (e.g., `GeminiProvider`).
pub trait GenerativeBackend: Send + Sync {
    /// Short backend name used in logs and spans (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send one request and wait for the whole response. Never retries.
    fn generate_content(
        &self,
        request: &ContentRequest,
    ) -> impl std::future::Future<Output = Result<ContentResponse, LlmError>> + Send;
}
