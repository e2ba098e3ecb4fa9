//! Messages sent from background tasks to the app.

use crate::clipboard::ClipboardRequest;
use crate::error::{ClipboardError, FileLoadError};
use crate::loader::FileLoadRequest;

#[derive(Debug)]
pub enum AppMessage {
    /// A file load finished.
    FileLoaded {
        request: FileLoadRequest,
        result: Result<String, FileLoadError>,
    },
    /// The primary clipboard write finished.
    ClipboardWritten {
        request: ClipboardRequest,
        result: Result<(), ClipboardError>,
    },
}
