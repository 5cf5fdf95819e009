//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No API key was supplied for the model service.
    #[error("API key not found in configuration")]
    MissingApiKey,

    /// A setting was present but unusable.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::MissingApiKey => "E_CFG_API_KEY",
            ConfigError::InvalidValue { .. } => "E_CFG_INVALID",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ConfigError::MissingApiKey => {
                "No API key configured. Set OMNITOOL_API_KEY to enable AI features.".to_string()
            }
            ConfigError::InvalidValue { key, message } => {
                format!("Setting '{}' is invalid: {}", key, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ConfigError::MissingApiKey.to_string(),
            "API key not found in configuration"
        );
        let err = ConfigError::InvalidValue {
            key: "model".to_string(),
            message: "empty".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for model: empty");
    }

    #[test]
    fn test_codes() {
        assert_eq!(ConfigError::MissingApiKey.error_code(), "E_CFG_API_KEY");
    }
}
