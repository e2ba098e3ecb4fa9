//! System clipboard adapter backed by `arboard`.
//!
//! Uses the OS-level clipboard (NSPasteboard on macOS, X11/Wayland on Linux,
//! the Win32 clipboard on Windows). `arboard` calls block, so writes run on
//! the blocking thread pool.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::ClipboardError;
use crate::traits::ClipboardWriter;

/// Clipboard writer for the OS clipboard.
///
/// The `arboard::Clipboard` handle is opened on first use and kept alive
/// afterwards: on X11 the copied text is served by this process, so the
/// handle must outlive the write.
#[derive(Clone, Default)]
pub struct SystemClipboard {
    handle: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

fn write_blocking(
    handle: &Mutex<Option<arboard::Clipboard>>,
    text: String,
) -> Result<(), ClipboardError> {
    let mut guard = handle
        .lock()
        .map_err(|_| ClipboardError::WriteFailed("clipboard lock poisoned".to_string()))?;

    if guard.is_none() {
        let clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        *guard = Some(clipboard);
    }

    match guard.as_mut() {
        Some(clipboard) => clipboard.set_text(text).map_err(|e| match e {
            arboard::Error::ClipboardNotSupported => ClipboardError::Unavailable(e.to_string()),
            other => ClipboardError::WriteFailed(other.to_string()),
        }),
        None => Err(ClipboardError::Unavailable("clipboard not initialized".to_string())),
    }
}

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let handle = Arc::clone(&self.handle);
        let text = text.to_string();
        tokio::task::spawn_blocking(move || write_blocking(&handle, text))
            .await
            .map_err(|e| ClipboardError::WriteFailed(format!("clipboard task failed: {}", e)))?
    }
}
