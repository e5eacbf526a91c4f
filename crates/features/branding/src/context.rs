use crate::catalog::BrandCatalog;
use crate::error::BrandingError;
use fxhash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use wpt_kernel::domain::brand::{Brand, BrandConfig, TouristRegion};
use wpt_kernel::domain::config::BrandingConfig;
use wpt_kernel::domain::tenant::TenantId;
use wpt_tenancy::{Resolution, TenantLinks, TenantResolver, first_segment};

/// Identity flags of the active brand. Exactly one is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BrandFlags {
    #[serde(rename = "isMS")]
    pub is_ms: bool,
    #[serde(rename = "isOverflowOne")]
    pub is_overflow_one: bool,
    #[serde(rename = "isFlowTrip")]
    pub is_flow_trip: bool,
}

impl From<Brand> for BrandFlags {
    fn from(brand: Brand) -> Self {
        Self {
            is_ms: brand == Brand::DescubraMs,
            is_overflow_one: brand == Brand::OverflowOne,
            is_flow_trip: brand == Brand::FlowTrip,
        }
    }
}

/// The brand active for one pathname, with the link scope that goes with it.
///
/// Built per request by [`BrandResolver::context`]; never stored.
#[derive(Debug, Clone)]
pub struct BrandContext {
    brand: Brand,
    config: Arc<BrandConfig>,
    resolution: Resolution,
    links: TenantLinks,
}

impl BrandContext {
    pub const fn brand(&self) -> Brand {
        self.brand
    }

    pub fn config(&self) -> &BrandConfig {
        &self.config
    }

    pub const fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub const fn links(&self) -> &TenantLinks {
        &self.links
    }

    pub fn flags(&self) -> BrandFlags {
        self.brand.into()
    }

    pub fn is_ms(&self) -> bool {
        self.brand == Brand::DescubraMs
    }

    pub fn is_overflow_one(&self) -> bool {
        self.brand == Brand::OverflowOne
    }

    pub fn is_flow_trip(&self) -> bool {
        self.brand == Brand::FlowTrip
    }

    /// Shorthand for [`TenantLinks::with_tenant`].
    pub fn with_tenant(&self, path: &str) -> String {
        self.links.with_tenant(path)
    }
}

/// Derives the active brand from a route.
#[derive(Debug, Clone)]
pub struct BrandResolver {
    catalog: BrandCatalog,
    default_brand: Brand,
    segment_brands: FxHashMap<String, Brand>,
    tenant_brands: BTreeMap<TenantId, Brand>,
    regions: Vec<TouristRegion>,
}

impl BrandResolver {
    /// # Errors
    /// * [`BrandingError::InvalidSegment`] for empty segments or segments containing `/`.
    /// * [`BrandingError::InvalidOverride`] for invalid logo overrides.
    pub fn from_config(config: &BrandingConfig) -> Result<Self, BrandingError> {
        let catalog = BrandCatalog::with_logos(&config.logos)?;

        let mut segment_brands = FxHashMap::default();
        for (segment, brand) in &config.segment_brands {
            let normalized = segment.trim().to_ascii_lowercase();
            if normalized.is_empty() || normalized.contains('/') {
                return Err(BrandingError::InvalidSegment {
                    segment: segment.clone(),
                    context: Some("branding.segment_brands".into()),
                });
            }
            segment_brands.insert(normalized, *brand);
        }

        Ok(Self {
            catalog,
            default_brand: config.default_brand,
            segment_brands,
            tenant_brands: config.tenant_brands.clone(),
            regions: config.regions.clone(),
        })
    }

    pub const fn catalog(&self) -> &BrandCatalog {
        &self.catalog
    }

    pub fn regions(&self) -> &[TouristRegion] {
        &self.regions
    }

    /// Picks the brand for `pathname`: tenant binding first, then the segment map,
    /// then the default brand.
    pub fn brand_for(&self, resolution: &Resolution, pathname: &str) -> Brand {
        resolution
            .tenant()
            .and_then(|tenant| self.tenant_brands.get(tenant).copied())
            .or_else(|| {
                let segment = first_segment(pathname)?;
                self.segment_brands.get(&segment.to_ascii_lowercase()).copied()
            })
            .unwrap_or(self.default_brand)
    }

    /// Resolves `pathname` with `tenants` and builds the brand context for it.
    pub fn context(&self, tenants: &TenantResolver, pathname: &str) -> BrandContext {
        let resolution = tenants.resolve(pathname);
        let brand = self.brand_for(&resolution, pathname);
        let config = Arc::clone(self.catalog.get(brand));

        let links = match &resolution {
            Resolution::Tenant(_) => TenantLinks::for_resolution(&resolution, tenants.table()),
            Resolution::Global if config.home != "/" => {
                let known = self
                    .tenant_for(brand)
                    .map(|tenant| tenants.table().prefixes_for(tenant))
                    .unwrap_or_default();
                TenantLinks::scoped(config.home.clone(), known)
            },
            Resolution::Global => TenantLinks::global(),
        };

        tracing::debug!(pathname, brand = %brand, tenant = ?resolution.tenant(), "brand context derived");

        BrandContext { brand, config, resolution, links }
    }

    fn tenant_for(&self, brand: Brand) -> Option<&TenantId> {
        self.tenant_brands.iter().find(|(_, b)| **b == brand).map(|(tenant, _)| tenant)
    }
}
