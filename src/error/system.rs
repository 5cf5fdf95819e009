//! Filesystem and OS integration errors.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum SystemError {
    /// File not found.
    FileNotFound { path: PathBuf },

    /// Permission denied for a file operation.
    PermissionDenied { path: PathBuf, operation: String },

    /// Path exists but is a directory.
    IsDirectory { path: PathBuf },

    /// Generic I/O error.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// System clipboard unavailable or rejected the write.
    Clipboard { message: String },
}

impl SystemError {
    pub fn user_message(&self) -> String {
        match self {
            SystemError::FileNotFound { path } => {
                format!("File not found: '{}'", path.display())
            }
            SystemError::PermissionDenied { path, operation } => {
                format!("Permission denied: cannot {} '{}'", operation, path.display())
            }
            SystemError::IsDirectory { path } => {
                format!("'{}' is a directory, not a file", path.display())
            }
            SystemError::IoError {
                operation, path, ..
            } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
            SystemError::Clipboard { .. } => "Clipboard is not available".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::FileNotFound { .. } => "E_SYS_FILE_NOT_FOUND",
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::IsDirectory { .. } => "E_SYS_IS_DIR",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::Clipboard { .. } => "E_SYS_CLIPBOARD",
        }
    }

    /// Failures caused by what the user typed rather than the machine.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            SystemError::FileNotFound { .. } | SystemError::IsDirectory { .. }
        )
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::FileNotFound { path } => {
                write!(f, "File not found: {}", path.display())
            }
            SystemError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied ({}): {}", operation, path.display())
            }
            SystemError::IsDirectory { path } => {
                write!(f, "Is a directory: {}", path.display())
            }
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(f, "I/O error during {} on {}: {}", operation, p.display(), message),
                None => write!(f, "I/O error during {}: {}", operation, message),
            },
            SystemError::Clipboard { message } => write!(f, "Clipboard error: {}", message),
        }
    }
}

impl std::error::Error for SystemError {}

/// Map an [`std::io::Error`] to a [`SystemError`], keeping the path if known.
pub fn classify_io_error(err: std::io::Error, path: Option<PathBuf>, operation: &str) -> SystemError {
    use std::io::ErrorKind;

    match (err.kind(), path) {
        (ErrorKind::NotFound, Some(path)) => SystemError::FileNotFound { path },
        (ErrorKind::PermissionDenied, Some(path)) => SystemError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        (_, Some(path)) if path.is_dir() => SystemError::IsDirectory { path },
        (_, path) => SystemError::IoError {
            operation: operation.to_string(),
            path,
            message: err.to_string(),
        },
    }
}
