//! GenerationClient -- the two sequential remote calls that produce a Build.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::{Instrument, info_span};

use architect_types::build::{Build, ImageReference};
use architect_types::error::GenerationError;
use architect_types::llm::{ContentRequest, OutputConfig, SQUARE_ASPECT_RATIO};

use crate::llm::BoxGenerativeBackend;
use crate::schema::{advisories, build_shape, validate};

use super::prompt::{SYSTEM_INSTRUCTION, image_prompt};

/// MIME type assumed when the service omits one on an inline part.
const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Issues the structured-build and illustration requests against one backend.
pub struct GenerationClient {
    backend: BoxGenerativeBackend,
    text_model: String,
    image_model: String,
}

impl GenerationClient {
    pub fn new(
        backend: BoxGenerativeBackend,
        text_model: impl Into<String>,
        image_model: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            text_model: text_model.into(),
            image_model: image_model.into(),
        }
    }

    pub fn text_model(&self) -> &str {
        &self.text_model
    }

    pub fn image_model(&self) -> &str {
        &self.image_model
    }

    /// Request a structured build for `prompt` and validate it.
    ///
    /// An empty (after trimming) prompt is rejected before any call is made.
    /// The returned build has no image attached.
    pub async fn generate_structured_build(&self, prompt: &str) -> Result<Build, GenerationError> {
        if prompt.trim().is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }

        let request = ContentRequest {
            model: self.text_model.clone(),
            system_instruction: Some(SYSTEM_INSTRUCTION.to_string()),
            prompt: prompt.to_string(),
            output: OutputConfig::Json {
                schema: build_shape().to_response_schema(),
            },
        };

        let span = info_span!(
            "gen_ai.generate_build",
            gen_ai.system = self.backend.name(),
            gen_ai.request.model = %request.model,
        );
        let response = self
            .backend
            .generate_content(&request)
            .instrument(span)
            .await
            .map_err(|e| GenerationError::GenerationFailed(e.to_string()))?;

        let raw: serde_json::Value = serde_json::from_str(&response.text())
            .map_err(|e| GenerationError::GenerationFailed(format!("response is not JSON: {e}")))?;
        let build = validate(&raw)?;

        for advisory in advisories(&build) {
            tracing::warn!(%advisory, build = %build.name, "Build does not follow convention");
        }
        tracing::debug!(build = %build.name, "Structured build validated");
        Ok(build)
    }

    /// Request an illustration for a validated build.
    ///
    /// Only the build's race, attunement, oath and weapon type reach the
    /// image service. The first inline image part of the reply becomes a
    /// data URI; inline parts with a non-image MIME type are ignored.
    pub async fn generate_illustration(&self, build: &Build) -> Result<ImageReference, GenerationError> {
        let request = ContentRequest {
            model: self.image_model.clone(),
            system_instruction: None,
            prompt: image_prompt(build),
            output: OutputConfig::Image {
                aspect_ratio: SQUARE_ASPECT_RATIO.to_string(),
            },
        };

        let span = info_span!(
            "gen_ai.generate_illustration",
            gen_ai.system = self.backend.name(),
            gen_ai.request.model = %request.model,
        );
        let response = self
            .backend
            .generate_content(&request)
            .instrument(span)
            .await
            .map_err(|e| GenerationError::ImageGenerationFailed(e.to_string()))?;

        let (mime_type, data) = response.first_image_data().ok_or_else(|| {
            GenerationError::ImageGenerationFailed("response has no inline image part".to_string())
        })?;
        if data.is_empty() {
            return Err(GenerationError::ImageGenerationFailed(
                "inline image part is empty".to_string(),
            ));
        }
        STANDARD.decode(data).map_err(|e| {
            GenerationError::ImageGenerationFailed(format!("inline image is not base64: {e}"))
        })?;

        let mime_type = if mime_type.is_empty() {
            DEFAULT_IMAGE_MIME
        } else {
            mime_type
        };
        Ok(ImageReference::data_uri(mime_type, data))
    }
}

/// A generation attempt that has not started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    prompt: String,
}

impl Pending {
    /// Accept a prompt, rejecting one that is empty after trimming.
    pub fn new(prompt: impl Into<String>) -> Result<Self, GenerationError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }
        Ok(Self { prompt })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub async fn generate_text(self, client: &GenerationClient) -> Result<TextReady, GenerationError> {
        let build = client.generate_structured_build(&self.prompt).await?;
        Ok(TextReady { build })
    }
}

/// A validated build still waiting for its illustration.
///
/// Never exposed to the view: only [`TextReady::illustrate`] turns it into
/// a displayable [`Build`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextReady {
    build: Build,
}

impl TextReady {
    pub fn build(&self) -> &Build {
        &self.build
    }

    pub async fn illustrate(self, client: &GenerationClient) -> Result<Build, GenerationError> {
        let image = client.generate_illustration(&self.build).await?;
        Ok(self.build.with_image(image))
    }
}

/// Something that turns a prompt into a complete, illustrated build.
///
/// The session drives generation through this trait so tests can supply
/// scripted generators.
pub trait BuildGenerator: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<Build, GenerationError>> + Send;
}

impl BuildGenerator for GenerationClient {
    async fn generate(&self, prompt: &str) -> Result<Build, GenerationError> {
        let pending = Pending::new(prompt)?;
        let text_ready = pending.generate_text(self).await?;
        text_ready.illustrate(self).await
    }
}
