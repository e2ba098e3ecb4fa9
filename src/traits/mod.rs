//! Trait abstractions for dependency injection and testability.
//!
//! - [`ClipboardWriter`] - Asynchronous clipboard write (system clipboard)
//! - [`FallbackClipboard`] - Synchronous fallback copy path

pub mod clipboard;

pub use clipboard::{ClipboardWriter, FallbackClipboard};
