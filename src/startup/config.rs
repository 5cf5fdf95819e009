//! Application configuration.
//!
//! `AppConfig` is a plain value. Only the binary calls [`AppConfig::from_env`];
//! library code receives the config explicitly.

use std::time::Duration;

use crate::error::ConfigError;

/// Default model for chat and script generation.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 3] = ["OMNITOOL_API_KEY", "GEMINI_API_KEY", "API_KEY"];

/// Configuration for the AI-backed features.
///
/// # Example
///
/// ```
/// use omnitool::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_key("test-key")
///     .with_model("gemini-2.5-pro");
/// assert_eq!(config.model, "gemini-2.5-pro");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Key sent as `x-goog-api-key`. AI features are disabled without it.
    pub api_key: Option<String>,
    /// Model identifier used for chat sessions and loader scripts.
    pub model: String,
    /// Service base URL, without the `/v1beta` suffix.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 60,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The API key, or [`ConfigError::MissingApiKey`] if absent or blank.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    /// Build a config from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.api_key = API_KEY_VARS
            .iter()
            .filter_map(|&name| lookup(name))
            .find(|value| !value.trim().is_empty());

        if let Some(model) = lookup("OMNITOOL_MODEL").filter(|m| !m.trim().is_empty()) {
            config.model = model.trim().to_string();
        }
        if let Some(url) = lookup("OMNITOOL_BASE_URL").filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup("OMNITOOL_TIMEOUT_SECS") {
            config.request_timeout_secs =
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidValue {
                        key: "OMNITOOL_TIMEOUT_SECS".to_string(),
                        message: e.to_string(),
                    })?;
        }

        Ok(config)
    }
}
