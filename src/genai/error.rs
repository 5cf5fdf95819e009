//! Errors from the generative AI client.

use thiserror::Error;

use crate::error::{ConfigError, ErrorCategory};
use crate::traits::HttpError;

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("request failed: {0}")]
    Transport(#[from] HttpError),

    /// Service answered with a non-2xx status.
    #[error("service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// 2xx response with no usable candidate text.
    #[error("response contained no text")]
    EmptyResponse,
}

pub type GenAiResult<T> = Result<T, GenAiError>;

impl GenAiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenAiError::Config(_) => ErrorCategory::Configuration,
            GenAiError::Transport(_) => ErrorCategory::Network,
            GenAiError::Status { status, .. } => match *status {
                401 | 403 => ErrorCategory::Auth,
                400..=499 if *status != 408 && *status != 429 => ErrorCategory::User,
                _ => ErrorCategory::Server,
            },
            GenAiError::Decode(_) | GenAiError::EmptyResponse => ErrorCategory::Server,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            GenAiError::Config(err) => err.error_code(),
            GenAiError::Transport(_) => "E_AI_TRANSPORT",
            GenAiError::Status { .. } => "E_AI_STATUS",
            GenAiError::Decode(_) => "E_AI_DECODE",
            GenAiError::EmptyResponse => "E_AI_EMPTY",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            GenAiError::Config(err) => err.user_message(),
            GenAiError::Transport(_) => {
                "Could not reach the model service. Check your connection.".to_string()
            }
            GenAiError::Status { status, message } => match *status {
                401 | 403 => "The model service rejected the API key.".to_string(),
                429 => "Rate limited by the model service. Wait a moment and try again.".to_string(),
                _ => format!("The model service returned an error ({}): {}", status, message),
            },
            GenAiError::Decode(_) => "The model service sent an unreadable response.".to_string(),
            GenAiError::EmptyResponse => "The model returned an empty reply.".to_string(),
        }
    }
}
