use std::borrow::Cow;
use wpt_kernel::error::{ContextSlot, format_context};

#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("Invalid access path{}: '{path}' must start with '/'", format_context(context))]
    InvalidPath { path: String, context: Option<Cow<'static, str>> },
}

impl ContextSlot for AccessError {
    fn context_slot(&mut self) -> Option<&mut Option<Cow<'static, str>>> {
        match self {
            Self::InvalidPath { context, .. } => Some(context),
        }
    }
}
