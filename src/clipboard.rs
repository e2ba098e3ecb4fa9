//! Copying slot contents to the clipboard.
//!
//! A copy tries the system clipboard first. Only when that clipboard is
//! unavailable does it fall back to the terminal (OSC 52). Whatever happens,
//! a non-empty copy ends in exactly one [`CopyOutcome`], which the app turns
//! into one notice. Copying an empty string never starts.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::app::{AppMessage, Notice};
use crate::error::ClipboardError;
use crate::traits::{ClipboardWriter, FallbackClipboard};

/// A pending copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardRequest {
    pub id: u64,
    pub text: String,
    /// Shown in the notice, e.g. "Text A".
    pub label: String,
}

impl ClipboardRequest {
    /// Returns `None` for empty text: copying nothing is disabled.
    pub fn new(id: u64, text: impl Into<String>, label: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text,
            label: label.into(),
        })
    }
}

/// Which path delivered the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    System,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { label: String, path: CopyPath },
    Failed { label: String, reason: ClipboardError },
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Copied { .. })
    }

    /// The single notice shown for this copy.
    pub fn notice(&self) -> Notice {
        match self {
            CopyOutcome::Copied { label, .. } => {
                Notice::success(format!("{} copied to clipboard!", label))
            }
            CopyOutcome::Failed { label, .. } => Notice::failure(format!(
                "Failed to copy {}. Please copy it manually.",
                label
            )),
        }
    }
}

/// Settle a copy given the primary writer's result, running the fallback if
/// the primary clipboard was unavailable.
pub fn finish_copy(
    request: &ClipboardRequest,
    primary: Result<(), ClipboardError>,
    fallback: &mut dyn FallbackClipboard,
) -> CopyOutcome {
    let label = request.label.clone();
    match primary {
        Ok(()) => CopyOutcome::Copied {
            label,
            path: CopyPath::System,
        },
        Err(err) if err.is_unavailable() => {
            tracing::info!(
                id = request.id,
                "System clipboard unavailable ({}), trying {}",
                err,
                fallback.name()
            );
            match fallback.copy_text(&request.text) {
                Ok(()) => CopyOutcome::Copied {
                    label,
                    path: CopyPath::Fallback,
                },
                Err(reason) => {
                    tracing::warn!(id = request.id, code = reason.error_code(), "Fallback copy failed: {}", reason);
                    CopyOutcome::Failed { label, reason }
                }
            }
        }
        Err(reason) => {
            tracing::warn!(id = request.id, code = reason.error_code(), "Clipboard write failed: {}", reason);
            CopyOutcome::Failed { label, reason }
        }
    }
}

/// Run the primary write in the background. The result arrives as
/// [`AppMessage::ClipboardWritten`]; the app then calls [`finish_copy`].
pub fn spawn_write(
    request: ClipboardRequest,
    writer: Arc<dyn ClipboardWriter>,
    tx: UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::debug!(id = request.id, "Writing {} to {} clipboard", request.label, writer.name());
        let result = writer.write_text(&request.text).await;
        let _ = tx.send(AppMessage::ClipboardWritten { request, result });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockClipboard;
    use crate::app::NoticeKind;

    fn request(text: &str) -> ClipboardRequest {
        ClipboardRequest::new(1, text, "Text A").unwrap()
    }

    /// Primary write then settle, as the app does across two events.
    async fn copy_text(
        request: &ClipboardRequest,
        writer: &dyn ClipboardWriter,
        fallback: &mut dyn FallbackClipboard,
    ) -> CopyOutcome {
        let primary = writer.write_text(&request.text).await;
        finish_copy(request, primary, fallback)
    }

    #[test]
    fn test_empty_text_is_not_a_request() {
        assert!(ClipboardRequest::new(1, "", "Text A").is_none());
        assert!(ClipboardRequest::new(1, " ", "Text A").is_some());
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let primary = MockClipboard::new();
        let mut fallback = MockClipboard::new();
        let outcome = copy_text(&request("abc"), &primary, &mut fallback).await;

        assert_eq!(
            outcome,
            CopyOutcome::Copied {
                label: "Text A".into(),
                path: CopyPath::System
            }
        );
        assert_eq!(primary.writes(), vec!["abc"]);
        assert!(fallback.writes().is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_primary_uses_fallback() {
        let primary = MockClipboard::failing(ClipboardError::Unavailable("headless".into()));
        let mut fallback = MockClipboard::new();
        let outcome = copy_text(&request("abc"), &primary, &mut fallback).await;

        assert!(matches!(
            outcome,
            CopyOutcome::Copied {
                path: CopyPath::Fallback,
                ..
            }
        ));
        assert_eq!(fallback.writes(), vec!["abc"]);
    }

    #[tokio::test]
    async fn test_refused_primary_fails_without_fallback() {
        let primary = MockClipboard::failing(ClipboardError::WriteFailed("denied".into()));
        let mut fallback = MockClipboard::new();
        let outcome = copy_text(&request("abc"), &primary, &mut fallback).await;

        assert!(!outcome.is_success());
        assert!(fallback.writes().is_empty());
    }

    #[tokio::test]
    async fn test_both_paths_failing_degrades_to_failure() {
        let primary = MockClipboard::failing(ClipboardError::Unavailable("headless".into()));
        let mut fallback = MockClipboard::failing(ClipboardError::Unavailable("no tty".into()));
        let outcome = copy_text(&request("abc"), &primary, &mut fallback).await;

        let notice = outcome.notice();
        assert_eq!(notice.kind, NoticeKind::Failure);
        assert_eq!(notice.message, "Failed to copy Text A. Please copy it manually.");
    }

    #[test]
    fn test_success_notice_names_label() {
        let outcome = CopyOutcome::Copied {
            label: "Text B".into(),
            path: CopyPath::System,
        };
        let notice = outcome.notice();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, "Text B copied to clipboard!");
    }
}
