use serde::{Deserialize, Serialize};
use wpt_kernel::domain::role::{Requirements, Role};

/// Profile row of the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub role: Role,
    pub region_id: Option<String>,
    pub city_id: Option<String>,
    /// Tourist service center the attendant works at.
    pub cat_id: Option<String>,
    pub permissions: Vec<String>,
    pub must_change_password: bool,
}

impl Profile {
    pub fn new(role: Role) -> Self {
        Self { role, ..Self::default() }
    }

    pub fn has_region(&self) -> bool {
        is_set(self.region_id.as_deref())
    }

    pub fn has_city(&self) -> bool {
        is_set(self.city_id.as_deref())
    }

    pub fn has_cat(&self) -> bool {
        is_set(self.cat_id.as_deref())
    }
}

/// Authentication state of the current visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    pub user_id: Option<String>,
    pub profile: Option<Profile>,
}

impl Session {
    /// Signed-in session with a profile.
    pub fn signed_in(user_id: impl Into<String>, profile: Profile) -> Self {
        Self { user_id: Some(user_id.into()), profile: Some(profile) }
    }

    pub fn is_authenticated(&self) -> bool {
        is_set(self.user_id.as_deref())
    }
}

/// What a protected page demands of the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct GuardPolicy {
    /// Role names as written in the route table. Empty means any role.
    /// Names no [`Role`] renders as never match.
    pub allowed_roles: Vec<String>,
    #[cfg_attr(feature = "server", schema(value_type = String, example = "REGION | CITY"))]
    pub requirements: Requirements,
}

impl GuardPolicy {
    pub fn roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed_roles: roles.into_iter().map(|role| role.to_string()).collect(),
            requirements: Requirements::empty(),
        }
    }

    #[must_use]
    pub const fn require(mut self, requirements: Requirements) -> Self {
        self.requirements = self.requirements.union(requirements);
        self
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.is_empty() || self.allowed_roles.iter().any(|name| name == role.as_ref())
    }
}

fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
