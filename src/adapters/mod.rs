//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`SystemClipboard`] - OS clipboard via arboard
//! - [`Osc52Clipboard`] - Terminal clipboard fallback via OSC 52
//!
//! The [`mock`] submodule provides test doubles.

pub mod mock;
pub mod osc52_clipboard;
pub mod system_clipboard;

pub use mock::MockClipboard;
pub use osc52_clipboard::Osc52Clipboard;
pub use system_clipboard::SystemClipboard;
