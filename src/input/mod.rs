//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> KeybindingConfig::resolve() -> Command -> App::execute_command()
//!          \-> (unbound) -> focused text input
//! ```
//!
//! - [`command`] - The [`Command`] enum
//! - [`keybindings`] - Default key binding tables

pub mod command;
pub mod keybindings;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig};

use crate::app::Focus;

/// The UI state that decides which bindings apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub focus: Focus,
    pub notice_open: bool,
    pub prompt_open: bool,
}

impl InputContext {
    /// Unbound keys are dropped instead of reaching a text input.
    pub fn is_blocked(&self) -> bool {
        self.notice_open || (self.focus == Focus::Diff && !self.prompt_open)
    }
}
