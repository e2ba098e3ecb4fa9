//! File loading errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading a file into a text slot.
#[derive(Debug, Error)]
pub enum FileLoadError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{} is a directory", path.display())]
    IsDirectory { path: PathBuf },

    /// The bytes are not valid UTF-8. `valid_up_to` is the byte offset of
    /// the first invalid sequence.
    #[error("{} is not valid UTF-8 text (invalid byte at offset {valid_up_to})", path.display())]
    Decode { path: PathBuf, valid_up_to: usize },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileLoadError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => FileLoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => FileLoadError::PermissionDenied { path },
            _ => FileLoadError::Io { path, source: err },
        }
    }

    /// Whether the user picked something that can never load as text.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            FileLoadError::NotFound { .. }
                | FileLoadError::IsDirectory { .. }
                | FileLoadError::Decode { .. }
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FileLoadError::NotFound { path } => {
                format!("File not found: '{}'", path.display())
            }
            FileLoadError::PermissionDenied { path } => {
                format!("Permission denied: cannot read '{}'", path.display())
            }
            FileLoadError::IsDirectory { path } => {
                format!("'{}' is a directory, not a file", path.display())
            }
            FileLoadError::Decode { path, .. } => {
                format!(
                    "'{}' could not be decoded as text. Only UTF-8 files can be compared.",
                    path.display()
                )
            }
            FileLoadError::Io { path, .. } => format!("Failed to read '{}'", path.display()),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FileLoadError::NotFound { .. } => "E_FILE_NOT_FOUND",
            FileLoadError::PermissionDenied { .. } => "E_FILE_PERM",
            FileLoadError::IsDirectory { .. } => "E_FILE_IS_DIR",
            FileLoadError::Decode { .. } => "E_FILE_DECODE",
            FileLoadError::Io { .. } => "E_FILE_IO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_kinds() {
        let err = FileLoadError::from_io("a.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, FileLoadError::NotFound { .. }));

        let err = FileLoadError::from_io(
            "a.txt",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, FileLoadError::PermissionDenied { .. }));

        let err = FileLoadError::from_io("a.txt", io::Error::other("disk on fire"));
        assert!(matches!(err, FileLoadError::Io { .. }));
    }

    #[test]
    fn test_decode_message_names_file() {
        let err = FileLoadError::Decode {
            path: PathBuf::from("/tmp/blob.bin"),
            valid_up_to: 3,
        };
        assert!(err.user_message().contains("/tmp/blob.bin"));
        assert!(err.to_string().contains("offset 3"));
        assert_eq!(err.error_code(), "E_FILE_DECODE");
        assert!(err.is_user_error());
    }
}
