//! Result alias and context helpers.

use super::context::ErrorContext;
use super::omni_error::OmniError;

pub type OmniResult<T> = Result<T, OmniError>;

/// Attach an [`ErrorContext`] to any result whose error converts into [`OmniError`].
pub trait ResultExt<T> {
    fn context(self, ctx: ErrorContext) -> OmniResult<T>;

    /// Like [`ResultExt::context`], but only builds the context on error.
    fn with_context<F>(self, f: F) -> OmniResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<OmniError>,
{
    fn context(self, ctx: ErrorContext) -> OmniResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> OmniResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
