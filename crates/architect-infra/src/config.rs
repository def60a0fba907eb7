//! Global configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.woken-architect/` by
//! default) into [`GlobalConfig`]. Falls back to defaults when the file is
//! missing or malformed.

use std::path::{Path, PathBuf};

use architect_types::config::GlobalConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ARCHITECT_DATA_DIR";

/// Resolve the data directory.
///
/// Priority: `ARCHITECT_DATA_DIR`, then `~/.woken-architect`, then
/// `.woken-architect` in the current directory.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".woken-architect");
    }

    PathBuf::from(".woken-architect")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`GlobalConfig::default()`].
/// - Unreadable or unparsable file: a warning is logged and the default returned.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config, GlobalConfig::default());
        assert_eq!(config.gemini.text_model, "gemini-3-pro-preview");
    }

    #[tokio::test]
    async fn load_global_config_partial_toml_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
[gemini]
image_model = "gemini-custom-image"
timeout_secs = 60

[server]
port = 8088
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.gemini.image_model, "gemini-custom-image");
        assert_eq!(config.gemini.timeout_secs, 60);
        assert_eq!(config.gemini.text_model, "gemini-3-pro-preview");
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config, GlobalConfig::default());
    }
}
