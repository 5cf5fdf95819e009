//! Error handling for the application.
//!
//! Domain errors (`ConfigError`, `SystemError`, and the client's `GenAiError`)
//! fold into [`OmniError`], which carries a category, a short code for logs,
//! and a message fit for the status bar.
//!
//! | Category | Retryable |
//! |----------|-----------|
//! | Network | Yes |
//! | Auth | No |
//! | Server | Yes |
//! | User | No |
//! | System | No |
//! | Configuration | No |
//!
//! ```ignore
//! use omnitool::error::{ErrorContext, OmniResult, ResultExt};
//!
//! fn load(path: &Path) -> OmniResult<Vec<u8>> {
//!     std::fs::read(path).with_context(|| ErrorContext::new("read_file"))
//! }
//! ```

mod category;
mod config;
mod context;
mod omni_error;
mod result;
mod system;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use omni_error::OmniError;
pub use result::{OmniResult, ResultExt};
pub use system::{classify_io_error, SystemError};
