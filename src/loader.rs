//! Reading local files into text slots.
//!
//! Loads run as tokio tasks and report back through the app message channel,
//! so the UI keeps drawing while a large file is read. Each request carries
//! an id; when two loads target the same slot, whichever completes last
//! wins.

use std::path::{Path, PathBuf};

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::app::AppMessage;
use crate::error::FileLoadError;
use crate::state::Slot;

/// UTF-8 byte order mark.
const UTF8_BOM: &str = "\u{feff}";

/// A pending request to load a file into a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLoadRequest {
    pub id: u64,
    pub slot: Slot,
    pub path: PathBuf,
}

/// Turn the text typed into the file prompt into a path.
///
/// Surrounding whitespace and matching quotes are removed (terminals quote
/// paths dropped onto them) and a leading `~` expands to the home directory.
pub fn resolve_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);

    if unquoted.is_empty() {
        return None;
    }

    if unquoted == "~" {
        return dirs::home_dir();
    }
    if let Some(rest) = unquoted.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Some(home.join(rest));
        }
    }
    Some(PathBuf::from(unquoted))
}

/// Decode file bytes as UTF-8 text.
///
/// A leading byte order mark is dropped; everything else, line endings
/// included, is kept as is.
pub fn decode_text(path: &Path, bytes: Vec<u8>) -> Result<String, FileLoadError> {
    match String::from_utf8(bytes) {
        Ok(text) => Ok(match text.strip_prefix(UTF8_BOM) {
            Some(stripped) => stripped.to_string(),
            None => text,
        }),
        Err(e) => Err(FileLoadError::Decode {
            path: path.to_path_buf(),
            valid_up_to: e.utf8_error().valid_up_to(),
        }),
    }
}

/// Read the whole file at `path` as text.
pub async fn read_text(path: &Path) -> Result<String, FileLoadError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| FileLoadError::from_io(path, e))?;
    if metadata.is_dir() {
        return Err(FileLoadError::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| FileLoadError::from_io(path, e))?;
    decode_text(path, bytes)
}

/// Spawn a background load. The outcome arrives as
/// [`AppMessage::FileLoaded`].
pub fn spawn_load(request: FileLoadRequest, tx: UnboundedSender<AppMessage>) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::debug!(
            id = request.id,
            slot = %request.slot,
            "Reading {}",
            request.path.display()
        );
        let result = read_text(&request.path).await;
        // Receiver gone means the app is shutting down
        let _ = tx.send(AppMessage::FileLoaded { request, result });
    })
}
