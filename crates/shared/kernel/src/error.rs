//! Context plumbing shared by every slice error enum.
//!
//! Slice errors carry an optional `context: Option<Cow<'static, str>>` field that is
//! rendered as ` (context)` after the variant label:
//!
//! ```rust
//! use std::borrow::Cow;
//! use wpt_kernel::error::{ContextSlot, ResultExt, format_context};
//!
//! #[derive(Debug, thiserror::Error)]
//! enum DemoError {
//!     #[error("Demo failure{}: {message}", format_context(context))]
//!     Failure { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
//! }
//!
//! impl ContextSlot for DemoError {
//!     fn context_slot(&mut self) -> Option<&mut Option<Cow<'static, str>>> {
//!         match self {
//!             Self::Failure { context, .. } => Some(context),
//!         }
//!     }
//! }
//!
//! let res: Result<(), DemoError> =
//!     Err(DemoError::Failure { message: "boom".into(), context: None });
//! let err = res.context("loading demo").unwrap_err();
//! assert_eq!(err.to_string(), "Demo failure (loading demo): boom");
//! ```

use std::borrow::Cow;

/// Renders an optional context as ` (context)`, or nothing.
#[allow(clippy::ref_option)]
pub fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Gives [`ResultExt::context`] access to the variant's context field.
pub trait ContextSlot {
    /// Returns `None` for variants that do not carry a context.
    fn context_slot(&mut self) -> Option<&mut Option<Cow<'static, str>>>;
}

/// Adds `.context(...)` to results whose error exposes a [`ContextSlot`].
pub trait ResultExt<T, E> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, E>;
}

impl<T, E: ContextSlot> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            if let Some(slot) = e.context_slot() {
                *slot = Some(context.into());
            }
            e
        })
    }
}
