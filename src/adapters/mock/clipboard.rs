//! In-memory clipboards for testing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::ClipboardError;
use crate::traits::{ClipboardWriter, FallbackClipboard};

/// Recording clipboard with a configurable failure.
///
/// Clones share state, so a test can keep one clone for assertions and hand
/// another to the app.
///
/// ```ignore
/// let clipboard = MockClipboard::new();
/// clipboard.write_text("hi").await?;
/// assert_eq!(clipboard.writes(), vec!["hi"]);
///
/// clipboard.fail_with(ClipboardError::Unavailable("headless".into()));
/// assert!(clipboard.write_text("again").await.is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<ClipboardError>>>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `error`.
    pub fn failing(error: ClipboardError) -> Self {
        let clipboard = Self::new();
        clipboard.fail_with(error);
        clipboard
    }

    /// Make subsequent writes fail with `error`.
    pub fn fail_with(&self, error: ClipboardError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Texts successfully written so far.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    fn record(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[async_trait]
impl ClipboardWriter for MockClipboard {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.record(text)
    }
}

impl FallbackClipboard for MockClipboard {
    fn name(&self) -> &'static str {
        "mock-fallback"
    }

    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.record(text)
    }
}
