//! Message handling for the App.

use super::{slot_index, App, AppMessage, Notice};
use crate::clipboard::finish_copy;
use crate::error::SidediffError;

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::FileLoaded { request, result } => match result {
                Ok(text) => {
                    let index = slot_index(request.slot);
                    if let Some(previous) = self.last_applied_load[index] {
                        if previous > request.id {
                            // Both loads resolve; the later completion wins
                            tracing::info!(
                                id = request.id,
                                previous,
                                slot = %request.slot,
                                "Load completed after a newer request; replacing its content"
                            );
                        }
                    }
                    self.last_applied_load[index] = Some(request.id);

                    tracing::info!(
                        id = request.id,
                        slot = %request.slot,
                        bytes = text.len(),
                        "Loaded {}",
                        request.path.display()
                    );
                    self.status = Some(format!(
                        "Loaded {} into {}",
                        request.path.display(),
                        request.slot
                    ));
                    self.set_text(request.slot, text);
                }
                Err(err) => {
                    let err = SidediffError::from(err);
                    tracing::warn!(
                        id = request.id,
                        code = err.error_code(),
                        category = err.category().as_str(),
                        "Load failed: {}",
                        err
                    );
                    self.status = None;
                    self.push_notice(Notice::failure(err.notice_text()));
                }
            },
            AppMessage::ClipboardWritten { request, result } => {
                let outcome = finish_copy(&request, result, self.fallback.as_mut());
                tracing::info!(id = request.id, success = outcome.is_success(), "Copy finished");
                self.push_notice(outcome.notice());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use super::*;
    use crate::adapters::MockClipboard;
    use crate::app::NoticeKind;
    use crate::clipboard::ClipboardRequest;
    use crate::config::Config;
    use crate::error::{ClipboardError, FileLoadError};
    use crate::loader::FileLoadRequest;
    use crate::state::Slot;

    fn load(id: u64, slot: Slot, result: Result<String, FileLoadError>) -> AppMessage {
        AppMessage::FileLoaded {
            request: FileLoadRequest {
                id,
                slot,
                path: PathBuf::from(format!("file{}.txt", id)),
            },
            result,
        }
    }

    #[test]
    fn test_loaded_text_replaces_slot() {
        let mut app = App::with_clipboards(
            Config::default(),
            Arc::new(MockClipboard::new()),
            Box::new(MockClipboard::new()),
        );
        app.handle_message(load(1, Slot::B, Ok("line1\nline2".into())));
        assert_eq!(app.text(Slot::B), "line1\nline2");
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_later_completion_wins() {
        let mut app = App::with_clipboards(
            Config::default(),
            Arc::new(MockClipboard::new()),
            Box::new(MockClipboard::new()),
        );
        app.handle_message(load(2, Slot::A, Ok("second request".into())));
        app.handle_message(load(1, Slot::A, Ok("first request".into())));
        assert_eq!(app.text(Slot::A), "first request");
    }

    #[test]
    fn test_failed_load_keeps_slot_and_notifies() {
        let mut app = App::with_clipboards(
            Config::default(),
            Arc::new(MockClipboard::new()),
            Box::new(MockClipboard::new()),
        );
        app.set_text(Slot::A, "before");
        app.handle_message(load(
            1,
            Slot::A,
            Err(FileLoadError::NotFound {
                path: PathBuf::from("gone.txt"),
            }),
        ));
        assert_eq!(app.text(Slot::A), "before");
        let notice = app.current_notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Failure);
        assert!(notice.message.contains("gone.txt"));
    }

    #[test]
    fn test_unavailable_clipboard_runs_fallback() {
        let fallback = MockClipboard::new();
        let mut app = App::with_clipboards(
            Config::default(),
            Arc::new(MockClipboard::new()),
            Box::new(fallback.clone()),
        );
        let request = ClipboardRequest::new(1, "abc", "Text A").unwrap();
        app.handle_message(AppMessage::ClipboardWritten {
            request,
            result: Err(ClipboardError::Unavailable("no display".into())),
        });

        assert_eq!(fallback.writes(), vec!["abc"]);
        assert_eq!(app.notices.len(), 1);
        assert_eq!(
            app.current_notice().unwrap().message,
            "Text A copied to clipboard!"
        );
    }
}
