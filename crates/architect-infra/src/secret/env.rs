//! Environment-variable API key lookup.
//!
//! Checks the configured variable (`GEMINI_API_KEY` by default), then the
//! generic `API_KEY`. Empty and non-Unicode values count as absent.

use secrecy::SecretString;

use architect_types::config::GeminiConfig;
use architect_types::error::CredentialError;

/// Fallback variable checked after the configured one.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Resolve the API key from the environment.
pub fn resolve_api_key(config: &GeminiConfig) -> Result<SecretString, CredentialError> {
    resolve_with(config, |name| std::env::var(name).ok())
}

fn resolve_with(
    config: &GeminiConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, CredentialError> {
    let mut candidates = vec![config.api_key_env.as_str()];
    if config.api_key_env != FALLBACK_API_KEY_ENV {
        candidates.push(FALLBACK_API_KEY_ENV);
    }

    for &name in &candidates {
        if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
            tracing::debug!(variable = %name, "API key resolved from environment");
            return Ok(SecretString::from(value));
        }
    }

    Err(CredentialError::NotFound {
        checked: candidates.join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_configured_variable_wins() {
        let key = resolve_with(
            &GeminiConfig::default(),
            env(&[("GEMINI_API_KEY", "primary"), ("API_KEY", "fallback")]),
        )
        .unwrap();
        assert_eq!(key.expose_secret(), "primary");
    }

    #[test]
    fn test_falls_back_to_api_key() {
        let key = resolve_with(&GeminiConfig::default(), env(&[("API_KEY", "fallback")])).unwrap();
        assert_eq!(key.expose_secret(), "fallback");
    }

    #[test]
    fn test_blank_value_is_absent() {
        let err = resolve_with(&GeminiConfig::default(), env(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no API key found (checked: GEMINI_API_KEY, API_KEY)"
        );
    }

    #[test]
    fn test_custom_variable_name() {
        let config = GeminiConfig {
            api_key_env: "ARCHITECT_TEST_KEY".to_string(),
            ..Default::default()
        };
        let key = resolve_with(&config, env(&[("ARCHITECT_TEST_KEY", "custom")])).unwrap();
        assert_eq!(key.expose_secret(), "custom");
    }
}
