use architect_core::session::Clipboard;
use architect_types::error::ClipboardError;

/// Arboard-based system clipboard.
///
/// The platform clipboard is opened per write, so the adapter itself holds
/// no platform handle and is `Send + Sync` everywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for ArboardClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| {
            tracing::debug!(error = %e, "System clipboard unavailable");
            ClipboardError::Unavailable
        })?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
