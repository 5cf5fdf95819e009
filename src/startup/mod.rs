//! Process startup: configuration and logging.
//!
//! # Components
//!
//! - [`config`] - [`AppConfig`] for the AI-backed features
//! - [`logging`] - tracing subscriber setup
//!
//! # Usage
//!
//! ```ignore
//! use omnitool::startup::{init_logging, AppConfig, LogTarget};
//!
//! let _guard = init_logging(&LogTarget::from_env())?;
//! let config = AppConfig::from_env()?;
//! ```

pub mod config;
pub mod logging;

pub use config::{AppConfig, API_KEY_VARS, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use logging::{file_writer, init_logging, LogTarget};
