//! Mock implementations for testing.
//!
//! - [`MockClipboard`] - Recording clipboard usable as either copy path

pub mod clipboard;

pub use clipboard::MockClipboard;
