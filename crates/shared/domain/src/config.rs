use crate::brand::{Brand, Logo, TouristRegion};
use crate::constants::{DESCUBRA_MS_LONG_SEGMENT, DESCUBRA_MS_SEGMENT, MS_TENANT};
use crate::tenant::{ResolutionPolicy, TenantId, TenantRoute};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use strum_macros::{Display, EnumString};

/// Top-level API configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub tenancy: TenancyConfig,
    pub branding: BrandingConfig,
    pub access: AccessConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Tenant route table and resolution policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TenancyConfig {
    pub policy: ResolutionPolicy,
    pub routes: Vec<TenantRoute>,
}

/// Brand derivation rules and per-brand overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    /// Brand used for global-scope paths that match nothing else.
    pub default_brand: Brand,
    /// Global-scope first segments owned by a specific brand.
    pub segment_brands: BTreeMap<String, Brand>,
    /// Tenant → brand bindings.
    pub tenant_brands: BTreeMap<TenantId, Brand>,
    /// Regions listed in the MS regions menu, in display order.
    pub regions: Vec<TouristRegion>,
    /// Logo overrides keyed by brand.
    pub logos: BTreeMap<Brand, Logo>,
}

/// Login routing for the route guard.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Path prefixes served by the `ViaJAR` platform.
    pub platform_prefixes: Vec<String>,
    pub platform_login: String,
    pub default_login: String,
}

/// Process logging.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level: `trace`, `debug`, `info`, `warn`, `error` or `off`.
    pub level: String,
    /// Extra filter directives, e.g. `wpt_tenancy=debug,tower_http=info`.
    pub directives: Option<String>,
    pub console: bool,
    /// Rolling file output; absent means console only.
    pub file: Option<LogFileConfig>,
}

/// Rolling log file settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogFileConfig {
    pub dir: PathBuf,
    pub rotation: LogRotation,
    pub max_files: usize,
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directives: None, console: true, file: None }
    }
}

impl Default for LogFileConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("logs"), rotation: LogRotation::Daily, max_files: 10, json: false }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for TenancyConfig {
    fn default() -> Self {
        let short = format!("/{DESCUBRA_MS_SEGMENT}");
        Self {
            policy: ResolutionPolicy::Strict,
            routes: vec![
                TenantRoute::new(MS_TENANT, MS_TENANT, &format!("/{MS_TENANT}")),
                TenantRoute::new(DESCUBRA_MS_SEGMENT, MS_TENANT, &short),
                TenantRoute::new(DESCUBRA_MS_LONG_SEGMENT, MS_TENANT, &short),
            ],
        }
    }
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            default_brand: Brand::OverflowOne,
            segment_brands: [
                ("flowtrip", Brand::FlowTrip),
                ("solucoes", Brand::FlowTrip),
                ("sobre-flowtrip", Brand::FlowTrip),
                ("master-dashboard", Brand::FlowTrip),
                ("eventos", Brand::DescubraMs),
            ]
            .into_iter()
            .map(|(segment, brand)| (segment.to_owned(), brand))
            .collect(),
            tenant_brands: BTreeMap::from([(TenantId::new(MS_TENANT), Brand::DescubraMs)]),
            regions: vec![
                TouristRegion::new("pantanal", "Pantanal", "#2E7D32"),
                TouristRegion::new("bonito-serra-da-bodoquena", "Bonito-Serra da Bodoquena", "#0288D1"),
                TouristRegion::new("caminho-dos-ipes", "Caminho dos Ipês", "#F9A825"),
                TouristRegion::new("costa-leste", "Costa Leste", "#6A1B9A"),
                TouristRegion::new("grande-dourados", "Grande Dourados", "#EF6C00"),
                TouristRegion::new("caminhos-da-natureza-cone-sul", "Caminhos da Natureza-Cone Sul", "#00897B"),
            ],
            logos: BTreeMap::new(),
        }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            platform_prefixes: [
                "/viajar",
                "/attendant-dashboard",
                "/secretary-dashboard",
                "/private-dashboard",
                "/unified",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            platform_login: "/viajar/login".to_owned(),
            default_login: "/descubrams/login".to_owned(),
        }
    }
}
