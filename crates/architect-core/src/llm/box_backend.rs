//! BoxGenerativeBackend -- object-safe wrapper for GenerativeBackend.
//!
//! `GenerativeBackendDyn` boxes the future, a blanket impl covers every
//! `GenerativeBackend`, and `BoxGenerativeBackend` delegates to it.

use std::future::Future;
use std::pin::Pin;

use architect_types::llm::{ContentRequest, ContentResponse, LlmError};

use super::backend::GenerativeBackend;

/// Object-safe version of [`GenerativeBackend`] with a boxed future.
pub trait GenerativeBackendDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_content_boxed<'a>(
        &'a self,
        request: &'a ContentRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ContentResponse, LlmError>> + Send + 'a>>;
}

impl<T: GenerativeBackend> GenerativeBackendDyn for T {
    fn name(&self) -> &str {
        GenerativeBackend::name(self)
    }

    fn generate_content_boxed<'a>(
        &'a self,
        request: &'a ContentRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ContentResponse, LlmError>> + Send + 'a>> {
        Box::pin(self.generate_content(request))
    }
}

/// Type-erased backend, so the generation client is not generic over
/// the adapter and tests can swap in a scripted one.
pub struct BoxGenerativeBackend {
    inner: Box<dyn GenerativeBackendDyn + Send + Sync>,
}

impl BoxGenerativeBackend {
    pub fn new<T: GenerativeBackend + 'static>(backend: T) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn generate_content(
        &self,
        request: &ContentRequest,
    ) -> Result<ContentResponse, LlmError> {
        self.inner.generate_content_boxed(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect_types::llm::{ContentPart, OutputConfig};

    struct Echo;

    impl GenerativeBackend for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate_content(
            &self,
            request: &ContentRequest,
        ) -> Result<ContentResponse, LlmError> {
            Ok(ContentResponse {
                model: request.model.clone(),
                parts: vec![ContentPart::Text {
                    text: request.prompt.clone(),
                }],
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_box_delegates_to_inner() {
        let backend = BoxGenerativeBackend::new(Echo);
        assert_eq!(backend.name(), "echo");

        let request = ContentRequest {
            model: "m".to_string(),
            system_instruction: None,
            prompt: "hello".to_string(),
            output: OutputConfig::Text,
        };
        let response = backend.generate_content(&request).await.unwrap();
        assert_eq!(response.text(), "hello");
        assert_eq!(response.model, "m");
    }
}
