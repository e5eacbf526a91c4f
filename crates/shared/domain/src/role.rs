//! Roles and per-route requirements used by the route guard.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// User role as stored on the profile. Unknown names read as [`Role::User`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumString, AsRefStr,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    MasterAdmin,
    StateAdmin,
    CityAdmin,
    CatAttendant,
    Collaborator,
    #[default]
    User,
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

bitflags! {
    /// Profile attributes a route may demand before it is rendered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Requirements: u8 {
        const REGION = 1 << 0;
        const CITY = 1 << 1;
    }
}
