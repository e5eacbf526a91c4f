use std::borrow::Cow;
use wpt_kernel::error::{ContextSlot, format_context};

/// Route-table construction errors. Resolution itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum TenancyError {
    #[error("Duplicate tenant segment{}: '{segment}'", format_context(context))]
    DuplicateSegment { segment: String, context: Option<Cow<'static, str>> },

    #[error("Invalid tenant route{}: {message}", format_context(context))]
    InvalidRoute { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ContextSlot for TenancyError {
    fn context_slot(&mut self) -> Option<&mut Option<Cow<'static, str>>> {
        match self {
            Self::DuplicateSegment { context, .. } | Self::InvalidRoute { context, .. } => {
                Some(context)
            },
        }
    }
}
