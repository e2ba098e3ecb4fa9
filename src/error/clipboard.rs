//! Clipboard errors.

use thiserror::Error;

/// Errors raised by a clipboard writer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// The clipboard capability does not exist in this environment
    /// (no display server, headless session).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard exists but refused the write.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

impl ClipboardError {
    /// Whether a fallback writer should be tried after this error.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ClipboardError::Unavailable(_))
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClipboardError::Unavailable(_) => "E_CLIP_UNAVAILABLE",
            ClipboardError::WriteFailed(_) => "E_CLIP_WRITE",
        }
    }
}
