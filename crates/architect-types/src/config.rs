//! Global configuration types for Woken Architect.
//!
//! `GlobalConfig` represents the top-level `config.toml` that selects the
//! remote models and the REST server address.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Loaded from `~/.woken-architect/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Remote generative-service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API root, without the version segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model for the structured build.
    #[serde(default = "default_text_model")]
    pub text_model: String,
    /// Model for the illustration.
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Per-request HTTP timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_text_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// REST server bind address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.gemini.text_model, "gemini-3-pro-preview");
        assert_eq!(config.gemini.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.gemini.timeout_secs, 300);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_global_config_deserialize_partial_tables() {
        let toml_str = r#"
[gemini]
text_model = "gemini-2.5-pro"

[server]
port = 8080
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.text_model, "gemini-2.5-pro");
        assert_eq!(config.gemini.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
    }
}
