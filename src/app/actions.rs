//! User actions: key handling, commands, and the operations they start.

use std::path::PathBuf;

use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};

use super::{App, FilePrompt};
use crate::clipboard::{self, ClipboardRequest};
use crate::input::Command;
use crate::loader::{self, FileLoadRequest};
use crate::state::Slot;

/// Rows scrolled per mouse wheel notch.
const MOUSE_SCROLL_LINES: usize = 3;

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctx = self.input_context();
        if let Some(cmd) = self.keybindings.resolve(&key, &ctx) {
            tracing::debug!(?cmd, "Key {:?} resolved", key.code);
            self.execute_command(cmd);
            return;
        }
        if ctx.is_blocked() {
            return;
        }

        if let Some(prompt) = self.file_prompt.as_mut() {
            prompt.input.input(key);
            self.mark_dirty();
            return;
        }

        if let Some(slot) = self.focus.slot() {
            if self.editor_mut(slot).input(key) {
                self.sync_from_editor(slot);
            }
            // Cursor movement also needs a redraw
            self.mark_dirty();
        }
    }

    /// Handle bracketed paste.
    pub fn handle_paste(&mut self, text: String) {
        if !self.notices.is_empty() {
            return;
        }
        if let Some(prompt) = self.file_prompt.as_mut() {
            // Paths are single-line
            let line = text.lines().next().unwrap_or_default();
            prompt.input.insert_str(line);
            self.mark_dirty();
            return;
        }
        if let Some(slot) = self.focus.slot() {
            if self.editor_mut(slot).insert_str(&text) {
                self.sync_from_editor(slot);
            }
            self.mark_dirty();
        }
    }

    /// Mouse wheel scrolls the diff pane. Other mouse input is ignored.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.notices.is_empty() || self.file_prompt.is_some() {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.execute_command(Command::ScrollUp(MOUSE_SCROLL_LINES)),
            MouseEventKind::ScrollDown => {
                self.execute_command(Command::ScrollDown(MOUSE_SCROLL_LINES))
            }
            _ => {}
        }
    }

    pub fn execute_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.quit(),
            Command::CycleFocus => self.focus = self.focus.next(),
            Command::CycleFocusBack => self.focus = self.focus.prev(),
            Command::OpenFilePrompt => self.open_file_prompt(),
            Command::CopyFocused => match self.focus.slot() {
                Some(slot) => {
                    self.request_copy(slot);
                }
                None => self.status = Some("Focus Text A or Text B to copy".to_string()),
            },
            Command::ClearAll => self.clear(),
            Command::ToggleFold => {
                self.diff_options.fold_unchanged = !self.diff_options.fold_unchanged;
                self.diff_scroll = 0;
            }
            Command::ScrollUp(n) => self.diff_scroll = self.diff_scroll.saturating_sub(n),
            Command::ScrollDown(n) => self.scroll_diff_to(self.diff_scroll.saturating_add(n)),
            Command::ScrollPageUp => {
                self.diff_scroll = self.diff_scroll.saturating_sub(self.page_size())
            }
            Command::ScrollPageDown => {
                self.scroll_diff_to(self.diff_scroll.saturating_add(self.page_size()))
            }
            Command::ScrollTop => self.diff_scroll = 0,
            Command::ScrollBottom => self.scroll_diff_to(usize::MAX),
            Command::DismissNotice => {
                self.notices.pop_front();
            }
            Command::SubmitPrompt => self.submit_file_prompt(),
            Command::CancelPrompt => {
                self.file_prompt = None;
            }
        }
        self.mark_dirty();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Open the path prompt for the focused slot (slot A from the diff pane).
    pub fn open_file_prompt(&mut self) {
        let slot = self.focus.slot().unwrap_or(Slot::A);
        self.file_prompt = Some(FilePrompt::new(slot));
        self.mark_dirty();
    }

    fn submit_file_prompt(&mut self) {
        let Some(prompt) = self.file_prompt.take() else {
            return;
        };
        match loader::resolve_path(&prompt.value()) {
            Some(path) => {
                self.request_file_load(prompt.slot, path);
            }
            None => self.status = Some("No file selected".to_string()),
        }
    }

    /// Start loading `path` into `slot` in the background. Returns the
    /// request id.
    ///
    /// Must be called inside a tokio runtime.
    pub fn request_file_load(&mut self, slot: Slot, path: PathBuf) -> u64 {
        let id = self.next_request_id();

        if self.config.is_allowed_extension(&path) {
            self.status = Some(format!("Loading {}...", path.display()));
        } else {
            tracing::warn!(
                id,
                "{} is not in the allowed extensions; loading anyway",
                path.display()
            );
            self.status = Some(format!(
                "{} has an unexpected extension; loading anyway",
                path.display()
            ));
        }

        tracing::info!(id, slot = %slot, "Loading {}", path.display());
        loader::spawn_load(FileLoadRequest { id, slot, path }, self.message_tx.clone());
        self.mark_dirty();
        id
    }

    /// Start copying the content of `slot`. Returns `None`, and does
    /// nothing, when the slot is empty.
    ///
    /// Must be called inside a tokio runtime.
    pub fn request_copy(&mut self, slot: Slot) -> Option<u64> {
        let id = self.next_request_id;
        let Some(request) = ClipboardRequest::new(id, self.store.text(slot), slot.label()) else {
            tracing::debug!(slot = %slot, "Copy skipped: slot is empty");
            return None;
        };
        self.next_request_id += 1;

        tracing::info!(id, slot = %slot, "Copying {} bytes", request.text.len());
        clipboard::spawn_write(request, self.clipboard.clone(), self.message_tx.clone());
        Some(id)
    }

    fn page_size(&self) -> usize {
        self.diff_viewport.max(1)
    }

    /// Scroll so that `row` is the first visible row, keeping the last
    /// page full.
    fn scroll_diff_to(&mut self, row: usize) {
        let rows = self.split_diff().rows.len();
        let max = rows.saturating_sub(self.page_size());
        self.diff_scroll = row.min(max);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::adapters::MockClipboard;
    use crate::app::{AppMessage, Focus};
    use crate::config::Config;

    fn test_app() -> App {
        App::with_clipboards(
            Config::default(),
            Arc::new(MockClipboard::new()),
            Box::new(MockClipboard::new()),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_typing_updates_focused_slot() {
        let mut app = test_app();
        for c in "hi".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.text(Slot::A), "hi\nx");
        assert_eq!(app.text(Slot::B), "");
    }

    #[test]
    fn test_tab_moves_focus_between_slots() {
        let mut app = test_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.focus, Focus::EditorB);
        assert_eq!(app.text(Slot::B), "b");
    }

    #[test]
    fn test_diff_focus_ignores_typing() {
        let mut app = test_app();
        app.focus = Focus::Diff;
        press(&mut app, KeyCode::Char('z'));
        assert!(app.input_required());
    }

    #[test]
    fn test_paste_into_editor() {
        let mut app = test_app();
        app.handle_paste("line1\nline2".to_string());
        assert_eq!(app.text(Slot::A), "line1\nline2");
    }

    #[test]
    fn test_ctrl_l_clears() {
        let mut app = test_app();
        app.set_text(Slot::A, "a");
        app.set_text(Slot::B, "b");
        ctrl(&mut app, 'l');
        assert_eq!(app.text(Slot::A), "");
        assert_eq!(app.text(Slot::B), "");
    }

    #[test]
    fn test_notice_blocks_editing_until_dismissed() {
        let mut app = test_app();
        app.push_notice(crate::app::Notice::success("Text A copied to clipboard!"));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.text(Slot::A), "");
        press(&mut app, KeyCode::Enter);
        assert!(app.current_notice().is_none());
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.text(Slot::A), "q");
    }

    #[test]
    fn test_cancel_prompt_leaves_slot_unchanged() {
        let mut app = test_app();
        app.set_text(Slot::A, "keep");
        ctrl(&mut app, 'o');
        assert!(app.file_prompt.is_some());
        app.handle_paste("/tmp/other.txt".to_string());
        press(&mut app, KeyCode::Esc);
        assert!(app.file_prompt.is_none());
        assert_eq!(app.text(Slot::A), "keep");
    }

    #[test]
    fn test_prompt_targets_focused_slot() {
        let mut app = test_app();
        app.focus = Focus::EditorB;
        app.open_file_prompt();
        assert_eq!(app.file_prompt.as_ref().map(|p| p.slot), Some(Slot::B));
    }

    #[test]
    fn test_toggle_fold() {
        let mut app = test_app();
        app.focus = Focus::Diff;
        assert!(app.diff_options.fold_unchanged);
        press(&mut app, KeyCode::Char('f'));
        assert!(!app.diff_options.fold_unchanged);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = test_app();
        let text: String = (0..50).map(|i| format!("line {}\n", i)).collect();
        app.set_text(Slot::A, text.clone());
        app.set_text(Slot::B, text);
        app.diff_options.fold_unchanged = false;
        app.diff_viewport = 10;
        app.focus = Focus::Diff;

        press(&mut app, KeyCode::End);
        let bottom = app.diff_scroll;
        assert_eq!(bottom, app.split_diff().rows.len() - 10);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.diff_scroll, bottom);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.diff_scroll, bottom - 10);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.diff_scroll, 0);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.diff_scroll, 0);
    }

    #[test]
    fn test_mouse_wheel_scrolls_diff() {
        let mut app = test_app();
        let text: String = (0..40).map(|i| format!("{}\n", i)).collect();
        app.set_text(Slot::A, text.clone());
        app.set_text(Slot::B, text);
        app.diff_options.fold_unchanged = false;
        app.diff_viewport = 10;

        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(wheel(MouseEventKind::ScrollDown));
        assert_eq!(app.diff_scroll, MOUSE_SCROLL_LINES);
        app.handle_mouse(wheel(MouseEventKind::ScrollUp));
        assert_eq!(app.diff_scroll, 0);
    }

    #[tokio::test]
    async fn test_empty_copy_is_noop() {
        let mut app = test_app();
        assert_eq!(app.request_copy(Slot::A), None);
        let rx = app.message_rx.as_mut().unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_copy_from_diff_focus_sets_status() {
        let mut app = test_app();
        app.set_text(Slot::A, "x");
        app.focus = Focus::Diff;
        ctrl(&mut app, 'y');
        assert!(app.status.is_some());
        assert!(app.message_rx.as_mut().unwrap().try_recv().is_err());
    }

    #[tokio::test]
    async fn test_copy_sends_clipboard_message() {
        let mut app = test_app();
        app.set_text(Slot::A, "copy me");
        let id = app.request_copy(Slot::A).unwrap();
        let msg = app.message_rx.as_mut().unwrap().recv().await.unwrap();
        match msg {
            AppMessage::ClipboardWritten { request, result } => {
                assert_eq!(request.id, id);
                assert_eq!(request.text, "copy me");
                assert!(result.is_ok());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
