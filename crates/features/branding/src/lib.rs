//! Brand context and navigation views.
//!
//! Three brands share one deployment: Descubra MS (state tourism portal), OverFlow One
//! (agency site) and FlowTrip (SaaS). The active brand is derived from the route on every
//! request, and the navigation bar and footer are rendered from it.

#[cfg(feature = "server")]
pub mod api;
mod catalog;
mod context;
mod error;
mod navigation;

pub use crate::catalog::BrandCatalog;
pub use crate::context::{BrandContext, BrandFlags, BrandResolver};
pub use crate::error::BrandingError;
pub use crate::navigation::{
    ActionKind, FooterView, NavAction, NavLink, NavigationRequest, NavigationView, RegionLink,
    RegionsMenu,
};

use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use wpt_kernel::domain::brand::Brand;
use wpt_kernel::domain::config::BrandingConfig;
use wpt_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use wpt_tenancy::TenantResolver;

/// Branding feature state.
#[derive(Debug, Clone)]
pub struct Branding {
    inner: Arc<BrandResolver>,
}

impl Branding {
    pub fn new(resolver: BrandResolver) -> Self {
        Self { inner: Arc::new(resolver) }
    }

    /// # Errors
    /// Returns [`BrandingError`] if a segment mapping or logo override is invalid.
    pub fn from_config(config: &BrandingConfig) -> Result<Self, BrandingError> {
        Ok(Self::new(BrandResolver::from_config(config)?))
    }

    pub fn navigation(&self, tenants: &TenantResolver, request: &NavigationRequest) -> NavigationView {
        let pathname = request.path.split_once('?').map_or(request.path.as_str(), |(p, _)| p);
        let ctx = self.context(tenants, pathname);
        let ms_home = &self.catalog().get(Brand::DescubraMs).home;
        NavigationView::render(&ctx, request, self.regions(), ms_home)
    }

    pub fn footer(&self, tenants: &TenantResolver, pathname: &str) -> FooterView {
        let ctx = self.context(tenants, pathname);
        FooterView::render(&ctx, pathname)
    }
}

impl Deref for Branding {
    type Target = BrandResolver;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Branding {
    fn name(&self) -> &'static str {
        "branding"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the branding feature.
///
/// # Errors
/// Returns an error if `config` contains an invalid segment mapping or logo override.
pub fn init(config: &BrandingConfig) -> Result<InitializedSlice, BrandingError> {
    let branding = Branding::from_config(config)?;
    tracing::info!(
        default_brand = %config.default_brand,
        segments = config.segment_brands.len(),
        regions = config.regions.len(),
        "Branding slice initialized"
    );
    Ok(InitializedSlice::new(branding))
}
