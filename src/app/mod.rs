//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which pane has focus
//! - [`Notice`] - Modal message shown after a copy or a failed load
//! - [`FilePrompt`] - Path entry for `Ctrl+O`
//! - [`AppMessage`] - Messages for async communication

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{FilePrompt, Focus, Notice, NoticeKind};

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::mpsc;
use tui_textarea::TextArea;

use crate::adapters::{Osc52Clipboard, SystemClipboard};
use crate::config::Config;
use crate::diff::{self, DiffOptions, SplitDiff};
use crate::input::{InputContext, KeybindingConfig};
use crate::state::{Slot, TextStore};
use crate::stats::Stats;
use crate::traits::{ClipboardWriter, FallbackClipboard};

/// Main application state
pub struct App {
    /// Contents of slots A and B. The editors mirror these.
    pub store: TextStore,
    /// Editors for slots A and B, in that order
    pub editors: [TextArea<'static>; 2],
    /// Which pane receives unbound keys
    pub focus: Focus,
    /// Settings loaded at startup
    pub config: Config,
    /// Current diff options (folding can be toggled at runtime)
    pub diff_options: DiffOptions,
    /// Key to command tables
    pub keybindings: KeybindingConfig,
    /// First visible row of the diff pane
    pub diff_scroll: usize,
    /// Rows visible in the diff pane (updated on render, used for paging)
    pub diff_viewport: usize,
    /// Notices waiting to be acknowledged; the front one is shown
    pub notices: VecDeque<Notice>,
    /// Path prompt, when open
    pub file_prompt: Option<FilePrompt>,
    /// One-line status shown in the footer
    pub status: Option<String>,
    /// Id of the load most recently applied to each slot
    last_applied_load: [Option<u64>; 2],
    /// Source of request ids, shared by loads and copies
    next_request_id: u64,
    /// Primary clipboard (system clipboard in production)
    clipboard: Arc<dyn ClipboardWriter>,
    /// Used when the primary clipboard is unavailable
    fallback: Box<dyn FallbackClipboard>,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub should_quit: bool,
    /// Dirty flag: set on state mutations, cleared after each draw.
    pub needs_redraw: bool,
}

impl App {
    /// Create an App using the system clipboard with an OSC 52 fallback.
    pub fn new(config: Config) -> Self {
        Self::with_clipboards(
            config,
            Arc::new(SystemClipboard::new()),
            Box::new(Osc52Clipboard::stdout()),
        )
    }

    /// Create an App with explicit clipboards.
    pub fn with_clipboards(
        config: Config,
        clipboard: Arc<dyn ClipboardWriter>,
        fallback: Box<dyn FallbackClipboard>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let tab_length = config.tab_length;

        Self {
            store: TextStore::new(),
            editors: [
                build_editor("", tab_length),
                build_editor("", tab_length),
            ],
            focus: Focus::default(),
            diff_options: config.diff_options(),
            config,
            keybindings: KeybindingConfig::new(),
            diff_scroll: 0,
            diff_viewport: 0,
            notices: VecDeque::new(),
            file_prompt: None,
            status: None,
            last_applied_load: [None, None],
            next_request_id: 1,
            clipboard,
            fallback,
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Replace the content of `slot`, updating its editor to match.
    pub fn set_text(&mut self, slot: Slot, value: impl Into<String>) {
        let value = value.into();
        *self.editor_mut(slot) = build_editor(&value, self.config.tab_length);
        self.store.set_text(slot, value);
        self.mark_dirty();
    }

    /// Current content of `slot`.
    pub fn text(&self, slot: Slot) -> &str {
        self.store.text(slot)
    }

    /// Empty both slots before the next draw.
    pub fn clear(&mut self) {
        self.store.clear();
        for slot in Slot::ALL {
            *self.editor_mut(slot) = build_editor("", self.config.tab_length);
        }
        self.diff_scroll = 0;
        self.status = None;
        tracing::debug!("Cleared both slots");
        self.mark_dirty();
    }

    pub fn editor(&self, slot: Slot) -> &TextArea<'static> {
        &self.editors[slot_index(slot)]
    }

    pub fn editor_mut(&mut self, slot: Slot) -> &mut TextArea<'static> {
        &mut self.editors[slot_index(slot)]
    }

    /// Copy the editor's lines into the store after an edit.
    fn sync_from_editor(&mut self, slot: Slot) {
        let text = self.editor(slot).lines().join("\n");
        self.store.set_text(slot, text);
    }

    /// Build the split diff of the current contents.
    pub fn split_diff(&self) -> SplitDiff {
        diff::split_diff(
            self.store.text(Slot::A),
            self.store.text(Slot::B),
            &self.diff_options,
        )
    }

    /// Stats for the current contents.
    pub fn stats(&self) -> Stats {
        Stats::project(&self.store, self.config.count_mode, self.split_diff().summary)
    }

    /// The diff pane has nothing to compare.
    pub fn input_required(&self) -> bool {
        self.store.both_empty()
    }

    /// Both slots have content, so the diff is live.
    pub fn is_live(&self) -> bool {
        self.store.both_filled()
    }

    /// The notice currently shown, if any.
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
        self.mark_dirty();
    }

    pub fn input_context(&self) -> InputContext {
        InputContext {
            focus: self.focus,
            notice_open: !self.notices.is_empty(),
            prompt_open: self.file_prompt.is_some(),
        }
    }

    fn next_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }
}

fn slot_index(slot: Slot) -> usize {
    match slot {
        Slot::A => 0,
        Slot::B => 1,
    }
}

/// Build an editor holding `text`. Lines are split on `\n` only, so joining
/// them back with `\n` reproduces the text exactly.
fn build_editor(text: &str, tab_length: u8) -> TextArea<'static> {
    let mut editor = TextArea::new(text.split('\n').map(String::from).collect());
    editor.set_tab_length(tab_length);
    editor.set_placeholder_text("Type or paste text, or press Ctrl+O to open a file");
    editor
}
