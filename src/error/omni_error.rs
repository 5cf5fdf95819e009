//! Unified error type for the application.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::context::ErrorContext;
use super::system::{classify_io_error, SystemError};
use crate::genai::GenAiError;

/// Every failure the library surfaces to the UI or CLI ends up here.
#[derive(Debug)]
pub enum OmniError {
    /// Missing or invalid configuration.
    Config(ConfigError),

    /// Model service failures.
    GenAi(GenAiError),

    /// Filesystem and OS integration failures.
    System(SystemError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<OmniError>,
        context: ErrorContext,
    },
}

impl OmniError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OmniError::Config(_) => ErrorCategory::Configuration,
            OmniError::GenAi(err) => err.category(),
            OmniError::System(err) => {
                if err.is_user_input() {
                    ErrorCategory::User
                } else {
                    ErrorCategory::System
                }
            }
            OmniError::WithContext { error, .. } => error.category(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    pub fn user_message(&self) -> String {
        match self {
            OmniError::Config(err) => err.user_message(),
            OmniError::GenAi(err) => err.user_message(),
            OmniError::System(err) => err.user_message(),
            OmniError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            OmniError::Config(err) => err.error_code(),
            OmniError::GenAi(err) => err.error_code(),
            OmniError::System(err) => err.error_code(),
            OmniError::WithContext { error, .. } => error.error_code(),
        }
    }

    pub fn with_context(self, ctx: ErrorContext) -> Self {
        OmniError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            OmniError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// The innermost error, with all context layers removed.
    pub fn inner(&self) -> &OmniError {
        match self {
            OmniError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for OmniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OmniError::Config(err) => write!(f, "{}", err),
            OmniError::GenAi(err) => write!(f, "{}", err),
            OmniError::System(err) => write!(f, "{}", err),
            OmniError::WithContext { error, context } => write!(f, "{} ({})", error, context),
        }
    }
}

impl std::error::Error for OmniError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OmniError::Config(err) => Some(err),
            OmniError::GenAi(err) => Some(err),
            OmniError::System(err) => Some(err),
            OmniError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<ConfigError> for OmniError {
    fn from(err: ConfigError) -> Self {
        OmniError::Config(err)
    }
}

impl From<GenAiError> for OmniError {
    fn from(err: GenAiError) -> Self {
        match err {
            GenAiError::Config(inner) => OmniError::Config(inner),
            other => OmniError::GenAi(other),
        }
    }
}

impl From<SystemError> for OmniError {
    fn from(err: SystemError) -> Self {
        OmniError::System(err)
    }
}

impl From<std::io::Error> for OmniError {
    fn from(err: std::io::Error) -> Self {
        OmniError::System(classify_io_error(err, None, "io"))
    }
}
