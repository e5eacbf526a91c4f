use crate::error::AccessError;
use crate::session::{GuardPolicy, Session};
use serde::Serialize;
use wpt_kernel::domain::config::AccessConfig;
use wpt_kernel::domain::role::{Requirements, Role};

pub const SELECT_REGION_PATH: &str = "/descubrams/select-region";
pub const SELECT_CITY_PATH: &str = "/descubrams/select-city";
pub const SELECT_CAT_PATH: &str = "/descubrams/select-cat";
pub const PENDING_APPROVAL_PATH: &str = "/descubrams/pending-approval";

/// Outcome of guarding a protected page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(tag = "decision", rename_all = "camelCase")]
pub enum AccessDecision {
    /// Render the page.
    Allow,
    /// Navigate away. With `remember_from` the login page returns the visitor here afterwards.
    #[serde(rename_all = "camelCase")]
    Redirect { to: String, remember_from: bool },
    /// Show the forced password change form instead of the page.
    ChangePassword,
}

impl AccessDecision {
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    fn redirect(to: impl Into<String>) -> Self {
        Self::Redirect { to: to.into(), remember_from: false }
    }
}

/// Pure route guard built from [`AccessConfig`].
#[derive(Debug, Clone)]
pub struct Guard {
    platform_prefixes: Vec<String>,
    platform_login: String,
    default_login: String,
}

impl Guard {
    /// # Errors
    /// Returns [`AccessError::InvalidPath`] if a configured prefix or login path is not absolute.
    pub fn from_config(config: &AccessConfig) -> Result<Self, AccessError> {
        let checked = |path: &str, context: &'static str| {
            if path.starts_with('/') {
                Ok(path.trim_end_matches('/').to_owned())
            } else {
                Err(AccessError::InvalidPath { path: path.to_owned(), context: Some(context.into()) })
            }
        };

        let platform_prefixes = config
            .platform_prefixes
            .iter()
            .map(|prefix| checked(prefix, "access.platform_prefixes"))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            platform_prefixes,
            platform_login: checked(&config.platform_login, "access.platform_login")?,
            default_login: checked(&config.default_login, "access.default_login")?,
        })
    }

    /// Whether `pathname` belongs to the platform area rather than the tourism portal.
    pub fn is_platform_path(&self, pathname: &str) -> bool {
        self.platform_prefixes.iter().any(|prefix| pathname.starts_with(prefix.as_str()))
    }

    pub fn login_path(&self, pathname: &str) -> &str {
        if self.is_platform_path(pathname) { &self.platform_login } else { &self.default_login }
    }

    /// Cookie policy page for the site `pathname` belongs to.
    ///
    /// Only the platform root itself (e.g. `/viajar`) counts here, dashboards share the portal policy.
    pub fn cookies_path(&self, pathname: &str) -> String {
        let platform_root = site_root(&self.platform_login);
        let root = if !platform_root.is_empty() && pathname.starts_with(platform_root) {
            platform_root
        } else {
            site_root(&self.default_login)
        };
        format!("{root}/cookies")
    }

    /// Decides whether `session` may see the page at `pathname` under `policy`.
    pub fn guard(&self, pathname: &str, session: &Session, policy: &GuardPolicy) -> AccessDecision {
        let profile = match &session.profile {
            Some(profile) if session.is_authenticated() => profile,
            _ => {
                let to = self.login_path(pathname);
                tracing::warn!(from = pathname, to, "Unauthenticated visitor redirected to login");
                return AccessDecision::Redirect { to: to.to_owned(), remember_from: true };
            },
        };

        if profile.must_change_password {
            tracing::debug!(from = pathname, "Password change required");
            return AccessDecision::ChangePassword;
        }

        let role = profile.role;
        if !policy.allows(role) {
            let to = self.login_path(pathname);
            tracing::warn!(from = pathname, %role, allowed = ?policy.allowed_roles, "Role not allowed");
            return AccessDecision::redirect(to);
        }

        if policy.requirements.contains(Requirements::REGION) && !profile.has_region() {
            tracing::warn!(from = pathname, "Region required but missing");
            return AccessDecision::redirect(SELECT_REGION_PATH);
        }
        if policy.requirements.contains(Requirements::CITY) && !profile.has_city() {
            tracing::warn!(from = pathname, "City required but missing");
            return AccessDecision::redirect(SELECT_CITY_PATH);
        }

        let missing = match role {
            Role::MasterAdmin => None,
            Role::StateAdmin => (!profile.has_region()).then_some(SELECT_REGION_PATH),
            Role::CityAdmin => (!profile.has_city()).then_some(SELECT_CITY_PATH),
            Role::CatAttendant => (!profile.has_cat()).then_some(SELECT_CAT_PATH),
            Role::Collaborator => profile.permissions.is_empty().then_some(PENDING_APPROVAL_PATH),
            Role::User => None,
        };

        if let Some(to) = missing {
            tracing::warn!(from = pathname, %role, to, "Profile incomplete for role");
            return AccessDecision::redirect(to);
        }

        tracing::trace!(from = pathname, %role, "Access granted");
        AccessDecision::Allow
    }
}

/// `/viajar/login` -> `/viajar`.
fn site_root(login: &str) -> &str {
    login.rsplit_once('/').map_or("", |(root, _)| root)
}
