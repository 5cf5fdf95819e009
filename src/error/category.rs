//! Error category classification.
//!
//! Categories drive retry decisions and the hint shown next to an error in
//! the status line.

use std::fmt;

/// High-level classification of an [`OmniError`](super::OmniError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection failures and timeouts talking to the model service.
    Network,

    /// The service rejected the API key (401/403).
    Auth,

    /// The service failed or answered with something unusable.
    Server,

    /// Bad input from the user (unreadable path, unknown format).
    User,

    /// Filesystem or clipboard failures.
    System,

    /// Missing or invalid settings, such as an absent API key.
    Configuration,
}

impl ErrorCategory {
    /// Transient categories where trying again may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Short suggestion for the user.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Auth => "Check that your API key is valid",
            ErrorCategory::Server => "The model service may be busy. Try again shortly",
            ErrorCategory::User => "Check your input and try again",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => {
                "Set OMNITOOL_API_KEY (or GEMINI_API_KEY) and restart"
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_retryable() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::Auth.is_retryable());
        assert!(!ErrorCategory::User.is_retryable());
        assert!(!ErrorCategory::System.is_retryable());
        assert!(!ErrorCategory::Configuration.is_retryable());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
        assert_eq!(format!("{}", ErrorCategory::Network), "network");
    }

    #[test]
    fn test_configuration_hint_names_the_variable() {
        assert!(ErrorCategory::Configuration
            .recovery_hint()
            .contains("OMNITOOL_API_KEY"));
    }
}
