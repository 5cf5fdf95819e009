//! Context attached to errors for logging.

use chrono::{DateTime, Utc};
use std::fmt;

/// Where and when an error happened.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// The operation that failed, e.g. `"generate_loader_script"`.
    pub operation: String,
    /// Library file the operation was working on.
    pub file_id: Option<String>,
    /// Persona the chat request was sent as.
    pub gem_id: Option<String>,
    /// When the error was recorded.
    pub timestamp: DateTime<Utc>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            file_id: None,
            gem_id: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_file_id(mut self, file_id: impl Into<String>) -> Self {
        self.file_id = Some(file_id.into());
        self
    }

    pub fn with_gem_id(mut self, gem_id: impl Into<String>) -> Self {
        self.gem_id = Some(gem_id.into());
        self
    }

    /// `key=value` pairs for structured log lines.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];
        if let Some(ref file_id) = self.file_id {
            parts.push(format!("file_id={}", file_id));
        }
        if let Some(ref gem_id) = self.gem_id {
            parts.push(format!("gem_id={}", gem_id));
        }
        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));
        parts.join(" ")
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "during {}", self.operation)?;
        if let Some(ref file_id) = self.file_id {
            write!(f, " [file {}]", file_id)?;
        }
        if let Some(ref gem_id) = self.gem_id {
            write!(f, " [gem {}]", gem_id)?;
        }
        Ok(())
    }
}
