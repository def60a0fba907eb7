//! Clipboard adapters for the copy-export flow.
//!
//! - `ArboardClipboard`: the desktop clipboard via `arboard`
//! - `Osc52Clipboard`: terminal escape sequence, for SSH sessions and
//!   headless hosts
//! - `FallbackClipboard`: tries one, then the other

mod osc52;
mod system;

pub use osc52::{Osc52Clipboard, osc52_sequence};
pub use system::ArboardClipboard;

use architect_core::session::Clipboard;
use architect_types::error::ClipboardError;

/// Writes to `primary`, and to `secondary` only if that fails.
pub struct FallbackClipboard<P, S> {
    primary: P,
    secondary: S,
}

impl<P: Clipboard, S: Clipboard> FallbackClipboard<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: Clipboard, S: Clipboard> Clipboard for FallbackClipboard<P, S> {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        match self.primary.write_text(text) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::debug!(error = %e, "Primary clipboard failed, trying fallback");
                self.secondary.write_text(text)
            }
        }
    }
}

/// The desktop clipboard, falling back to OSC 52 on `writer`.
pub fn system_clipboard<W: std::io::Write + Send>(
    writer: W,
) -> FallbackClipboard<ArboardClipboard, Osc52Clipboard<W>> {
    FallbackClipboard::new(ArboardClipboard::new(), Osc52Clipboard::new(writer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect_core::session::MemoryClipboard;

    struct Broken;

    impl Clipboard for Broken {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable)
        }
    }

    #[test]
    fn test_primary_success_skips_fallback() {
        let clipboard = FallbackClipboard::new(MemoryClipboard::new(), MemoryClipboard::new());
        clipboard.write_text("export").unwrap();
        assert_eq!(clipboard.primary.writes(), vec!["export".to_string()]);
        assert!(clipboard.secondary.writes().is_empty());
    }

    #[test]
    fn test_primary_failure_uses_fallback() {
        let clipboard = FallbackClipboard::new(Broken, MemoryClipboard::new());
        clipboard.write_text("export").unwrap();
        assert_eq!(clipboard.secondary.writes(), vec!["export".to_string()]);
    }

    #[test]
    fn test_both_failing_reports_error() {
        let clipboard = FallbackClipboard::new(Broken, Broken);
        assert!(matches!(
            clipboard.write_text("export"),
            Err(ClipboardError::Unavailable)
        ));
    }

    #[test]
    fn test_osc52_fallback_receives_sequence() {
        let clipboard = FallbackClipboard::new(Broken, Osc52Clipboard::new(Vec::new()));
        clipboard.write_text("hi").unwrap();
        let written = String::from_utf8(clipboard.secondary.into_inner()).unwrap();
        assert_eq!(written, osc52_sequence("hi"));
    }
}
