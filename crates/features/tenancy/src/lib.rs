//! Tenant path resolution.
//!
//! A tenant is a sub-site addressed by the first URL segment (`/ms/...`, `/descubrams/...`).
//! Membership is declared in an explicit [`RouteTable`]; anything else falls back to the
//! global scope. The legacy "any two-letter segment is a tenant" rule is still available
//! as [`ResolutionPolicy::TwoLetter`].
//!
//! ```rust
//! use wpt_tenancy::{RouteTable, TenantResolver};
//! use wpt_kernel::domain::config::TenancyConfig;
//! use wpt_kernel::domain::tenant::ResolutionPolicy;
//!
//! let table = RouteTable::new(TenancyConfig::default().routes).unwrap();
//! let resolver = TenantResolver::new(table, ResolutionPolicy::Strict);
//!
//! let links = resolver.link_builder("/ms/destinos");
//! assert_eq!(links.with_tenant("/login"), "/ms/login");
//! assert!(!resolver.is_tenant_path("/sobre-overflow-one"));
//! ```

#[cfg(feature = "server")]
pub mod api;
mod error;
mod resolver;
mod table;

pub use crate::error::TenancyError;
pub use crate::resolver::{Resolution, TenantLinks, TenantResolver, TenantScope, first_segment};
pub use crate::table::RouteTable;
pub use wpt_kernel::domain::tenant::ResolutionPolicy;

use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use wpt_kernel::domain::config::TenancyConfig;
use wpt_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use wpt_kernel::error::ResultExt;

/// Tenancy feature state.
#[derive(Debug, Clone)]
pub struct Tenancy {
    inner: Arc<TenantResolver>,
}

impl Tenancy {
    pub fn new(resolver: TenantResolver) -> Self {
        Self { inner: Arc::new(resolver) }
    }

    /// Builds the resolver from configuration.
    ///
    /// # Errors
    /// Returns [`TenancyError`] if the configured route table is invalid.
    pub fn from_config(config: &TenancyConfig) -> Result<Self, TenancyError> {
        let table = RouteTable::new(config.routes.iter().cloned())
            .context("tenancy.routes")?;
        Ok(Self::new(TenantResolver::new(table, config.policy)))
    }
}

impl Deref for Tenancy {
    type Target = TenantResolver;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Tenancy {
    fn name(&self) -> &'static str {
        "tenancy"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the tenancy feature.
///
/// # Errors
/// Returns an error if the route table in `config` is invalid.
pub fn init(config: &TenancyConfig) -> Result<InitializedSlice, TenancyError> {
    let tenancy = Tenancy::from_config(config)?;
    tracing::info!(
        routes = tenancy.table().len(),
        policy = %tenancy.policy(),
        "Tenancy slice initialized"
    );
    Ok(InitializedSlice::new(tenancy))
}
