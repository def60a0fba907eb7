//! Application state shared by CLI commands and REST handlers.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use architect_core::generation::GenerationClient;
use architect_core::session::Session;
use architect_infra::config::{load_global_config, resolve_data_dir};
use architect_infra::create_generation_client;
use architect_infra::secret::resolve_api_key;
use architect_types::config::GlobalConfig;

/// One session per process. Cloning shares it.
#[derive(Clone)]
pub struct AppState {
    pub session: Session,
    pub generator: Arc<GenerationClient>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    pub fn new(generator: GenerationClient, config: GlobalConfig, data_dir: PathBuf) -> Self {
        Self {
            session: Session::new(),
            generator: Arc::new(generator),
            config: Arc::new(config),
            data_dir,
        }
    }

    /// Load configuration, resolve the API key and wire the Gemini client.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_global_config(&data_dir).await;

        let api_key = resolve_api_key(&config.gemini).with_context(|| {
            format!(
                "set {} (or API_KEY) to your Gemini API key",
                config.gemini.api_key_env
            )
        })?;
        let generator = create_generation_client(&config.gemini, api_key)
            .context("failed to create the Gemini client")?;

        tracing::debug!(
            data_dir = %data_dir.display(),
            text_model = %config.gemini.text_model,
            image_model = %config.gemini.image_model,
            "Application state initialized"
        );
        Ok(Self::new(generator, config, data_dir))
    }
}
