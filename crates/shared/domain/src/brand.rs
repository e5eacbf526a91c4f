//! Brand configuration data model.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A branded frontend served from the shared codebase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Brand {
    DescubraMs,
    #[default]
    OverflowOne,
    FlowTrip,
}

/// Display assets for the brand logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub src: String,
    pub alt: String,
    /// Served when `src` fails to load.
    pub fallback: String,
}

/// A single menu entry. `path` is tenant-relative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub name: String,
    pub path: String,
}

impl NavItem {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self { name: name.into(), path: path.into() }
    }
}

/// Call-to-action button labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Cta {
    pub primary: String,
    pub secondary: String,
}

/// Everything a navigation or footer renderer needs to know about one brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BrandConfig {
    /// Human-readable brand name.
    pub name: String,
    pub logo: Logo,
    pub navigation: Vec<NavItem>,
    /// Shown only when a session user is present.
    pub authenticated_navigation: Vec<NavItem>,
    pub cta: Cta,
    /// Landing path of the brand (`/descubrams`, `/`). Tenant-less pages of a brand with a
    /// non-root home keep their links under it; legal pages live below it.
    pub home: String,
}

/// A tourist region listed in the MS regions menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TouristRegion {
    pub slug: String,
    pub name: String,
    /// CSS color of the region marker.
    pub color: String,
}

impl TouristRegion {
    pub fn new(slug: &str, name: &str, color: &str) -> Self {
        Self { slug: slug.to_owned(), name: name.to_owned(), color: color.to_owned() }
    }
}
