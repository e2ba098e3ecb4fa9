//! Error category classification.
//!
//! Categories drive how an error is presented: whether the user can fix it by
//! acting differently, or whether the environment is at fault.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// User action required (wrong path, non-text file).
    User,

    /// OS/filesystem errors (permissions, missing files).
    System,

    /// A host capability is missing or refused (clipboard, terminal).
    Environment,

    /// Configuration file problems.
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Environment => "environment",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::User => "Check the selected file and try again",
            ErrorCategory::System => "Check file permissions and that the file still exists",
            ErrorCategory::Environment => "Copy the text manually from the editor",
            ErrorCategory::Configuration => "Fix or remove the configuration file",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
