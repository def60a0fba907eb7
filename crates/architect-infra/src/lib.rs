//! Infrastructure layer for Woken Architect.
//!
//! Implements the ports defined in `architect-core`: the Gemini REST backend,
//! environment-based credential lookup, the arboard system clipboard with an
//! OSC 52 fallback, and the `config.toml` loader.

pub mod clipboard;
pub mod config;
pub mod gemini;
pub mod secret;

use std::time::Duration;

use secrecy::SecretString;

use architect_core::generation::GenerationClient;
use architect_core::llm::BoxGenerativeBackend;
use architect_types::config::GeminiConfig;
use architect_types::llm::LlmError;

use self::gemini::GeminiProvider;

/// Build a [`GenerationClient`] backed by Gemini from configuration.
pub fn create_generation_client(
    config: &GeminiConfig,
    api_key: SecretString,
) -> Result<GenerationClient, LlmError> {
    let provider = GeminiProvider::new(api_key, Duration::from_secs(config.timeout_secs))?
        .with_base_url(config.base_url.clone());
    Ok(GenerationClient::new(
        BoxGenerativeBackend::new(provider),
        config.text_model.clone(),
        config.image_model.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_generation_client_uses_configured_models() {
        let config = GeminiConfig {
            text_model: "text-x".to_string(),
            image_model: "image-y".to_string(),
            ..Default::default()
        };
        let client = create_generation_client(&config, SecretString::from("k")).unwrap();
        assert_eq!(client.text_model(), "text-x");
        assert_eq!(client.image_model(), "image-y");
    }
}
