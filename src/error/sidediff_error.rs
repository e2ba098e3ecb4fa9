//! Unified error type for sidediff.

use thiserror::Error;

use super::category::ErrorCategory;
use super::clipboard::ClipboardError;
use super::config::ConfigError;
use super::file::FileLoadError;

/// Unified error type.
///
/// `SidediffError` wraps the domain errors so that the UI can present any
/// failure the same way: a category, a short code for the log, and a
/// message fit for a notice.
#[derive(Debug, Error)]
pub enum SidediffError {
    #[error(transparent)]
    File(#[from] FileLoadError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl SidediffError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SidediffError::File(err) => {
                if err.is_user_error() {
                    ErrorCategory::User
                } else {
                    ErrorCategory::System
                }
            }
            SidediffError::Clipboard(_) => ErrorCategory::Environment,
            SidediffError::Config(_) => ErrorCategory::Configuration,
            SidediffError::Terminal(_) => ErrorCategory::Environment,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SidediffError::File(err) => err.user_message(),
            SidediffError::Clipboard(err) => err.to_string(),
            SidediffError::Config(err) => err.to_string(),
            SidediffError::Terminal(err) => format!("Terminal error: {}", err),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SidediffError::File(err) => err.error_code(),
            SidediffError::Clipboard(err) => err.error_code(),
            SidediffError::Config(err) => err.error_code(),
            SidediffError::Terminal(_) => "E_TERM_IO",
        }
    }

    /// Message plus the category's recovery hint, as shown in a notice.
    pub fn notice_text(&self) -> String {
        format!("{}\n\n{}", self.user_message(), self.category().recovery_hint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_errors_split_by_cause() {
        let user: SidediffError = FileLoadError::Decode {
            path: PathBuf::from("a.bin"),
            valid_up_to: 0,
        }
        .into();
        assert_eq!(user.category(), ErrorCategory::User);

        let system: SidediffError = FileLoadError::PermissionDenied {
            path: PathBuf::from("secret.txt"),
        }
        .into();
        assert_eq!(system.category(), ErrorCategory::System);
    }

    #[test]
    fn test_clipboard_error_is_environment() {
        let err: SidediffError = ClipboardError::Unavailable("headless".into()).into();
        assert_eq!(err.category(), ErrorCategory::Environment);
        assert_eq!(err.error_code(), "E_CLIP_UNAVAILABLE");
    }

    #[test]
    fn test_notice_text_includes_hint() {
        let err: SidediffError = FileLoadError::NotFound {
            path: PathBuf::from("missing.txt"),
        }
        .into();
        let text = err.notice_text();
        assert!(text.contains("missing.txt"));
        assert!(text.contains(ErrorCategory::User.recovery_hint()));
    }
}
