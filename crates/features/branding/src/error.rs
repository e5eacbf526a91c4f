use std::borrow::Cow;
use wpt_kernel::error::{ContextSlot, format_context};

/// Errors raised while assembling the brand catalog from configuration.
#[derive(Debug, thiserror::Error)]
pub enum BrandingError {
    #[error("Invalid brand override{}: {message}", format_context(context))]
    InvalidOverride { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid brand segment{}: '{segment}'", format_context(context))]
    InvalidSegment { segment: String, context: Option<Cow<'static, str>> },
}

impl ContextSlot for BrandingError {
    fn context_slot(&mut self) -> Option<&mut Option<Cow<'static, str>>> {
        match self {
            Self::InvalidOverride { context, .. } | Self::InvalidSegment { context, .. } => {
                Some(context)
            },
        }
    }
}
