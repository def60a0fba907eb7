//! Terminal clipboard via the OSC 52 escape sequence.
//!
//! Supporting terminals (including over SSH) place the payload on the
//! local clipboard. Terminals without support ignore the sequence.

use std::io::Write;
use std::sync::Mutex;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use architect_core::session::Clipboard;
use architect_types::error::ClipboardError;

pub struct Osc52Clipboard<W: Write + Send> {
    writer: Mutex<W>,
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// The escape sequence that sets the clipboard selection to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut writer = self.writer.lock().map_err(|_| ClipboardError::Unavailable)?;
        writer
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_encodes_payload() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_write_text_emits_sequence_verbatim() {
        let clipboard = Osc52Clipboard::new(Vec::new());
        let export = "Build\n=====\nLVL 20 Khan, Castebreaker, Arcwarder";
        clipboard.write_text(export).unwrap();

        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        let payload = written
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix('\x07'))
            .unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), export.as_bytes());
    }
}
