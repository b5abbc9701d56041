//! Context helpers for errors that carry no diagnostic of their own.
//!
//! I/O and serialisation failures are wrapped into a `miette` report with a
//! short message describing what was being attempted, so they render the
//! same way as makefile parse errors.

use miette::{Context, IntoDiagnostic, Result};
use std::fmt::Display;

/// Wrap a plain `Result` error into a `miette` report with context.
pub(crate) trait ResultExt<T> {
    /// Wrap with a fixed message, such as `"flush output"`.
    fn diag(self, context: impl Display + Send + Sync + 'static) -> Result<T>;

    /// Wrap with a message built only when the result is an error.
    fn diag_with(self, context: impl FnOnce() -> String) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn diag(self, context: impl Display + Send + Sync + 'static) -> Result<T> {
        self.into_diagnostic().wrap_err(context)
    }

    fn diag_with(self, context: impl FnOnce() -> String) -> Result<T> {
        self.into_diagnostic().wrap_err_with(context)
    }
}
