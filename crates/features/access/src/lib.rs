//! Access decisions for protected pages.
//!
//! The guard never renders or navigates; it returns an [`AccessDecision`] the caller acts on.

#[cfg(feature = "server")]
pub mod api;
mod error;
mod guard;
mod session;

pub use crate::error::AccessError;
pub use crate::guard::{
    AccessDecision, Guard, PENDING_APPROVAL_PATH, SELECT_CAT_PATH, SELECT_CITY_PATH,
    SELECT_REGION_PATH,
};
pub use crate::session::{GuardPolicy, Profile, Session};
pub use wpt_kernel::domain::role::{Requirements, Role};

use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use wpt_kernel::domain::config::AccessConfig;
use wpt_kernel::domain::registry::{FeatureSlice, InitializedSlice};

/// Access feature state.
#[derive(Debug, Clone)]
pub struct Access {
    inner: Arc<Guard>,
}

impl Access {
    /// # Errors
    /// Returns [`AccessError`] if a configured path is not absolute.
    pub fn from_config(config: &AccessConfig) -> Result<Self, AccessError> {
        Ok(Self { inner: Arc::new(Guard::from_config(config)?) })
    }
}

impl Deref for Access {
    type Target = Guard;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Access {
    fn name(&self) -> &'static str {
        "access"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the access feature.
///
/// # Errors
/// Returns an error if `config` contains a relative path.
pub fn init(config: &AccessConfig) -> Result<InitializedSlice, AccessError> {
    let access = Access::from_config(config)?;
    tracing::info!(platform_prefixes = config.platform_prefixes.len(), "Access slice initialized");
    Ok(InitializedSlice::new(access))
}
