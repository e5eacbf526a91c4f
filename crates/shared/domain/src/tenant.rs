//! Tenant identity and route-table entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

/// Canonical tenant identifier (always lower-case).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(from = "String")]
pub struct TenantId(String);

impl TenantId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TenantId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One entry of the explicit tenant route table.
///
/// `segment` is the first URL segment selecting the tenant, `prefix` is what internal
/// links are prefixed with while inside that scope (leading `/`, no trailing `/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TenantRoute {
    pub segment: String,
    pub tenant: TenantId,
    pub prefix: String,
}

impl TenantRoute {
    pub fn new(segment: &str, tenant: &str, prefix: &str) -> Self {
        Self { segment: segment.to_owned(), tenant: TenantId::new(tenant), prefix: prefix.to_owned() }
    }
}

/// How unknown first segments are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ResolutionPolicy {
    /// Only segments listed in the route table select a tenant.
    #[default]
    Strict,
    /// Legacy: any two-character first segment is also treated as a tenant code.
    TwoLetter,
}
