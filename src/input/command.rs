//! Commands that keyboard input can trigger.
//!
//! Keys map to a [`Command`]; the app executes commands. Keys without a
//! binding go to whichever text input has focus.

/// Every user action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit (Ctrl+C, Ctrl+Q)
    Quit,
    /// Move focus A → B → Diff (Tab)
    CycleFocus,
    /// Move focus backwards (Shift+Tab)
    CycleFocusBack,
    /// Open the file prompt for the focused slot (Ctrl+O)
    OpenFilePrompt,
    /// Copy the focused slot to the clipboard (Ctrl+Y)
    CopyFocused,
    /// Empty both slots (Ctrl+L)
    ClearAll,

    // =========================================================================
    // Diff pane
    // =========================================================================
    /// Fold or unfold unchanged runs (f)
    ToggleFold,
    /// Scroll up by the given number of rows (Up, k)
    ScrollUp(usize),
    /// Scroll down by the given number of rows (Down, j)
    ScrollDown(usize),
    /// Scroll up one viewport height (PageUp)
    ScrollPageUp,
    /// Scroll down one viewport height (PageDown)
    ScrollPageDown,
    /// Jump to the first row (Home, g)
    ScrollTop,
    /// Jump to the last row (End, G)
    ScrollBottom,

    // =========================================================================
    // Modals
    // =========================================================================
    /// Close the notice (Enter, Esc, Space)
    DismissNotice,
    /// Load the typed path (Enter)
    SubmitPrompt,
    /// Close the prompt, leaving the slot unchanged (Esc)
    CancelPrompt,
}
