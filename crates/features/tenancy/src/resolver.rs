use crate::table::RouteTable;
use serde::Serialize;
use wpt_kernel::domain::tenant::{ResolutionPolicy, TenantId};

/// The tenant a path belongs to and the prefix its internal links keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TenantScope {
    pub tenant: TenantId,
    /// First path segment exactly as it appeared in the request.
    pub segment: String,
    pub prefix: String,
}

/// Outcome of resolving a pathname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(tag = "scope", rename_all = "camelCase")]
pub enum Resolution {
    Tenant(TenantScope),
    Global,
}

impl Resolution {
    pub const fn is_tenant(&self) -> bool {
        matches!(self, Self::Tenant(_))
    }

    pub const fn scope(&self) -> Option<&TenantScope> {
        match self {
            Self::Tenant(scope) => Some(scope),
            Self::Global => None,
        }
    }

    pub fn tenant(&self) -> Option<&TenantId> {
        self.scope().map(|scope| &scope.tenant)
    }
}

/// Resolves pathnames against a [`RouteTable`] under a [`ResolutionPolicy`].
#[derive(Debug, Clone)]
pub struct TenantResolver {
    table: RouteTable,
    policy: ResolutionPolicy,
}

impl TenantResolver {
    pub const fn new(table: RouteTable, policy: ResolutionPolicy) -> Self {
        Self { table, policy }
    }

    pub const fn table(&self) -> &RouteTable {
        &self.table
    }

    pub const fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    /// Resolves the first non-empty segment of `pathname`.
    ///
    /// Query strings and fragments are ignored. Unknown or malformed paths resolve to
    /// [`Resolution::Global`].
    pub fn resolve(&self, pathname: &str) -> Resolution {
        let Some(segment) = first_segment(pathname) else {
            return Resolution::Global;
        };

        if let Some(route) = self.table.get(segment) {
            tracing::trace!(pathname, segment, tenant = %route.tenant, "tenant route matched");
            return Resolution::Tenant(TenantScope {
                tenant: route.tenant.clone(),
                segment: segment.to_owned(),
                prefix: route.prefix.clone(),
            });
        }

        if self.policy == ResolutionPolicy::TwoLetter && segment.chars().count() == 2 {
            tracing::trace!(pathname, segment, "two-letter segment treated as tenant");
            return Resolution::Tenant(TenantScope {
                tenant: TenantId::new(segment),
                segment: segment.to_owned(),
                prefix: format!("/{segment}"),
            });
        }

        Resolution::Global
    }

    pub fn is_tenant_path(&self, pathname: &str) -> bool {
        self.resolve(pathname).is_tenant()
    }

    /// Link rewriter bound to the scope of `pathname`.
    pub fn link_builder(&self, pathname: &str) -> TenantLinks {
        TenantLinks::for_resolution(&self.resolve(pathname), &self.table)
    }
}

/// Rewrites internal links so they stay inside the current tenant scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantLinks {
    prefix: Option<String>,
    /// Every prefix of the active tenant; links already under one are left alone.
    known: Vec<String>,
}

impl TenantLinks {
    /// Links that pass through unchanged.
    pub const fn global() -> Self {
        Self { prefix: None, known: Vec::new() }
    }

    /// Links scoped under `prefix`, treating every prefix in `known` as already scoped.
    pub fn scoped(prefix: impl Into<String>, mut known: Vec<String>) -> Self {
        let prefix = prefix.into();
        if !known.contains(&prefix) {
            known.push(prefix.clone());
        }
        Self { prefix: Some(prefix), known }
    }

    pub fn for_resolution(resolution: &Resolution, table: &RouteTable) -> Self {
        let Some(scope) = resolution.scope() else {
            return Self::global();
        };
        Self::scoped(scope.prefix.clone(), table.prefixes_for(&scope.tenant))
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Prefixes `path` with the tenant prefix.
    ///
    /// * global scope: `path` is returned unchanged;
    /// * `/` (optionally followed by `?…`/`#…`) maps to the bare prefix;
    /// * relative paths gain a leading `/`;
    /// * a path already under one of the tenant's prefixes is returned unchanged.
    pub fn with_tenant(&self, path: &str) -> String {
        let Some(prefix) = self.prefix.as_deref() else {
            return path.to_owned();
        };

        let rest = path.strip_prefix('/').unwrap_or(path);
        if rest.is_empty() || rest.starts_with(['?', '#']) {
            return format!("{prefix}{rest}");
        }

        if self.known.iter().any(|known| is_under(path, known)) {
            return path.to_owned();
        }

        format!("{prefix}/{rest}")
    }
}

fn is_under(path: &str, prefix: &str) -> bool {
    let Some((head, rest)) = path.split_at_checked(prefix.len()) else {
        return false;
    };
    head.eq_ignore_ascii_case(prefix) && (rest.is_empty() || rest.starts_with(['/', '?', '#']))
}

/// First non-empty `/`-separated segment of the path part of `pathname`.
pub fn first_segment(pathname: &str) -> Option<&str> {
    let path = pathname.split(['?', '#']).next().unwrap_or_default();
    path.split('/').find(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wpt_kernel::domain::config::TenancyConfig;

    fn resolver(policy: ResolutionPolicy) -> TenantResolver {
        let table = RouteTable::new(TenancyConfig::default().routes).expect("default table");
        TenantResolver::new(table, policy)
    }

    #[test]
    fn first_segment_ignores_query_and_empties() {
        assert_eq!(first_segment("//ms//destinos"), Some("ms"));
        assert_eq!(first_segment("/?ms=1"), None);
        assert_eq!(first_segment("/eventos#top"), Some("eventos"));
        assert_eq!(first_segment(""), None);
    }

    #[test]
    fn root_is_global() {
        let r = resolver(ResolutionPolicy::TwoLetter);
        assert_eq!(r.resolve("/"), Resolution::Global);
        assert!(!r.is_tenant_path("/"));
    }

    #[test]
    fn segment_case_is_preserved_in_scope() {
        let r = resolver(ResolutionPolicy::Strict);
        let scope = r.resolve("/MS/destinos").scope().cloned().expect("tenant");
        assert_eq!(scope.segment, "MS");
        assert_eq!(scope.tenant.as_str(), "ms");
        assert_eq!(scope.prefix, "/ms");
    }

    #[test]
    fn with_tenant_handles_query_and_relative_paths() {
        let links = resolver(ResolutionPolicy::Strict).link_builder("/ms/destinos");
        assert_eq!(links.with_tenant("/?tab=1"), "/ms?tab=1");
        assert_eq!(links.with_tenant("login"), "/ms/login");
        assert_eq!(links.with_tenant(""), "/ms");
        // `/mse` is not under `/ms`.
        assert_eq!(links.with_tenant("/mse"), "/ms/mse");
    }

    #[test]
    fn links_under_sibling_alias_are_kept() {
        let links = resolver(ResolutionPolicy::Strict).link_builder("/ms");
        assert_eq!(links.with_tenant("/descubrams/guata"), "/descubrams/guata");
    }

    #[test]
    fn prefix_check_ignores_case() {
        let links = resolver(ResolutionPolicy::Strict).link_builder("/ms/destinos");
        assert_eq!(links.with_tenant("/MS/x"), "/MS/x");
        assert_eq!(links.with_tenant("/DescubraMS"), "/DescubraMS");
        assert_eq!(links.with_tenant("/MSE"), "/ms/MSE");
    }

    #[test]
    fn global_links_pass_through() {
        let links = TenantLinks::global();
        assert_eq!(links.prefix(), None);
        assert_eq!(links.with_tenant("relative"), "relative");
    }
}
