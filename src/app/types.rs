//! Type definitions for the application state.
//!
//! - [`Focus`] - Which pane receives keys
//! - [`Notice`] - Modal message that blocks input until dismissed
//! - [`FilePrompt`] - Path entry for loading a file into a slot

use tui_textarea::TextArea;

use crate::state::Slot;

/// Which pane has focus. `Tab` cycles A → B → Diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Focus {
    #[default]
    EditorA,
    EditorB,
    Diff,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::EditorA => Focus::EditorB,
            Focus::EditorB => Focus::Diff,
            Focus::Diff => Focus::EditorA,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::EditorA => Focus::Diff,
            Focus::EditorB => Focus::EditorA,
            Focus::Diff => Focus::EditorB,
        }
    }

    /// The slot edited in this pane, if it is an editor.
    pub fn slot(self) -> Option<Slot> {
        match self {
            Focus::EditorA => Some(Slot::A),
            Focus::EditorB => Some(Slot::B),
            Focus::Diff => None,
        }
    }

    pub fn editor(slot: Slot) -> Self {
        match slot {
            Slot::A => Focus::EditorA,
            Slot::B => Focus::EditorB,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A message the user must acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "Done",
            NoticeKind::Failure => "Error",
        }
    }
}

/// Path prompt opened with Ctrl+O.
#[derive(Debug, Clone)]
pub struct FilePrompt {
    pub slot: Slot,
    pub input: TextArea<'static>,
}

impl FilePrompt {
    pub fn new(slot: Slot) -> Self {
        let mut input = TextArea::default();
        input.set_placeholder_text("path/to/file.txt");
        input.set_cursor_line_style(ratatui::style::Style::default());
        Self { slot, input }
    }

    /// The typed path, as one line.
    pub fn value(&self) -> String {
        self.input.lines().join("")
    }
}
