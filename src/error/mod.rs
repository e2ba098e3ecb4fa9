//! Error handling for sidediff.
//!
//! - **Error Categories**: classification used to pick a recovery hint
//! - **Domain errors**: file loading, clipboard, configuration
//! - **Unified error**: `SidediffError` wraps all of them
//!
//! | Category | Raised by |
//! |----------|-----------|
//! | User | non-text or missing files |
//! | System | permission and I/O failures |
//! | Environment | clipboard and terminal capabilities |
//! | Configuration | invalid config file |

mod category;
mod clipboard;
mod config;
mod file;
mod result;
mod sidediff_error;

pub use category::ErrorCategory;
pub use clipboard::ClipboardError;
pub use config::ConfigError;
pub use file::FileLoadError;
pub use result::SidediffResult;
pub use sidediff_error::SidediffError;
