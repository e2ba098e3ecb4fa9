//! Clipboard trait abstractions.
//!
//! Copying goes through two seams: an asynchronous primary writer (the
//! system clipboard) and a synchronous fallback used only when the primary
//! clipboard is unavailable.

use async_trait::async_trait;

use crate::error::ClipboardError;

/// Asynchronous clipboard writer.
///
/// # Example
///
/// ```ignore
/// use sidediff::traits::ClipboardWriter;
///
/// async fn copy<W: ClipboardWriter>(writer: &W) {
///     match writer.write_text("hello").await {
///         Ok(()) => println!("copied via {}", writer.name()),
///         Err(e) if e.is_unavailable() => println!("try the fallback"),
///         Err(e) => println!("copy failed: {}", e),
///     }
/// }
/// ```
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Place `text` on the clipboard.
    ///
    /// # Returns
    /// - `Ok(())` when the clipboard accepted the text
    /// - `Err(ClipboardError::Unavailable)` when no clipboard can be reached
    /// - `Err(ClipboardError::WriteFailed)` when the clipboard refused the write
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Synchronous fallback copy path, run on the UI thread.
pub trait FallbackClipboard: Send {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
