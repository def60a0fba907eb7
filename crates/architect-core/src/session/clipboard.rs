//! Clipboard port for the copy-export flow.

use architect_types::error::ClipboardError;

/// Destination for copied export text.
///
/// Write failures are reported but never surfaced to the user.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard, useful as a test double.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: std::sync::Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every text written, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.contents
            .lock()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?
            .push(text.to_string());
        Ok(())
    }
}
