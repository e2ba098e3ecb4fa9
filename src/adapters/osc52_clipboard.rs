//! Terminal clipboard fallback using the OSC 52 escape sequence.
//!
//! OSC 52 asks the terminal emulator to set its clipboard to a base64
//! payload. It works over SSH and without a display server, but the
//! terminal may ignore it silently, so success here means the request was
//! written, not that the clipboard changed.

use std::io::{self, IsTerminal, Write};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::error::ClipboardError;
use crate::traits::FallbackClipboard;

/// Largest text accepted. Many terminals drop longer OSC 52 payloads.
pub const MAX_OSC52_BYTES: usize = 1024 * 1024;

/// Build the OSC 52 sequence that places `text` on the system clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64.encode(text.as_bytes()))
}

/// Fallback clipboard that writes OSC 52 sequences to a terminal.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write + Send> {
    writer: W,
    is_terminal: bool,
}

impl Osc52Clipboard<io::Stdout> {
    /// Writer for the process's stdout. Unavailable when stdout is not a
    /// terminal.
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let is_terminal = stdout.is_terminal();
        Self {
            writer: stdout,
            is_terminal,
        }
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    /// Writer for an arbitrary sink, treated as a terminal.
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            is_terminal: true,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> FallbackClipboard for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.is_terminal {
            return Err(ClipboardError::Unavailable(
                "output is not a terminal".to_string(),
            ));
        }
        if text.len() > MAX_OSC52_BYTES {
            return Err(ClipboardError::WriteFailed(format!(
                "text is too large for the terminal clipboard ({} bytes)",
                text.len()
            )));
        }

        self.writer
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
