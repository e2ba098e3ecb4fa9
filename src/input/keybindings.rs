//! Default keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::InputContext;
use crate::app::Focus;

/// Lines scrolled per arrow key press in the diff pane.
const SCROLL_STEP: usize = 1;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

impl From<&KeyEvent> for KeyCombo {
    /// Shift is dropped from character keys since it is already reflected
    /// in the character itself.
    fn from(key: &KeyEvent) -> Self {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }
}

/// Keybinding tables, consulted from most to least specific.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active while a notice is shown. Everything else is blocked.
    pub notice: HashMap<KeyCombo, Command>,
    /// Active while the file prompt is open.
    pub prompt: HashMap<KeyCombo, Command>,
    /// Always active outside modals.
    pub global: HashMap<KeyCombo, Command>,
    /// Per focused pane.
    pub focus: HashMap<Focus, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            notice: HashMap::new(),
            prompt: HashMap::new(),
            global: HashMap::new(),
            focus: HashMap::new(),
        };
        config.setup_modal_bindings();
        config.setup_global_bindings();
        config.setup_diff_bindings();
        config
    }

    fn setup_modal_bindings(&mut self) {
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char(' ')] {
            self.notice.insert(KeyCombo::plain(code), Command::DismissNotice);
        }
        self.notice
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);

        self.prompt
            .insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitPrompt);
        self.prompt
            .insert(KeyCombo::plain(KeyCode::Esc), Command::CancelPrompt);
        self.prompt
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('q')), Command::Quit);
        self.global
            .insert(KeyCombo::plain(KeyCode::Tab), Command::CycleFocus);
        // Terminals report Shift+Tab as BackTab, with or without SHIFT set
        self.global
            .insert(KeyCombo::plain(KeyCode::BackTab), Command::CycleFocusBack);
        self.global
            .insert(KeyCombo::shift(KeyCode::BackTab), Command::CycleFocusBack);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('o')), Command::OpenFilePrompt);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('y')), Command::CopyFocused);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('l')), Command::ClearAll);
    }

    fn setup_diff_bindings(&mut self) {
        let mut diff = HashMap::new();
        diff.insert(KeyCombo::plain(KeyCode::Char('f')), Command::ToggleFold);
        diff.insert(KeyCombo::plain(KeyCode::Up), Command::ScrollUp(SCROLL_STEP));
        diff.insert(KeyCombo::plain(KeyCode::Char('k')), Command::ScrollUp(SCROLL_STEP));
        diff.insert(KeyCombo::plain(KeyCode::Down), Command::ScrollDown(SCROLL_STEP));
        diff.insert(KeyCombo::plain(KeyCode::Char('j')), Command::ScrollDown(SCROLL_STEP));
        diff.insert(KeyCombo::plain(KeyCode::PageUp), Command::ScrollPageUp);
        diff.insert(KeyCombo::plain(KeyCode::PageDown), Command::ScrollPageDown);
        diff.insert(KeyCombo::plain(KeyCode::Home), Command::ScrollTop);
        diff.insert(KeyCombo::plain(KeyCode::Char('g')), Command::ScrollTop);
        diff.insert(KeyCombo::plain(KeyCode::End), Command::ScrollBottom);
        diff.insert(KeyCombo::plain(KeyCode::Char('G')), Command::ScrollBottom);
        self.focus.insert(Focus::Diff, diff);
    }

    /// Resolve a key to a command in the given context.
    ///
    /// A notice swallows every key it does not bind (returns `None` and the
    /// caller must not forward the key). Use [`InputContext::is_blocked`]
    /// to tell the two cases apart.
    pub fn resolve(&self, key: &KeyEvent, ctx: &InputContext) -> Option<Command> {
        let combo = KeyCombo::from(key);

        if ctx.notice_open {
            return self.notice.get(&combo).copied();
        }
        if ctx.prompt_open {
            return self.prompt.get(&combo).copied();
        }
        if let Some(cmd) = self.global.get(&combo) {
            return Some(*cmd);
        }
        self.focus
            .get(&ctx.focus)
            .and_then(|bindings| bindings.get(&combo))
            .copied()
    }
}
