use crate::error::TenancyError;
use fxhash::FxHashMap;
use wpt_kernel::domain::tenant::{TenantId, TenantRoute};

/// Exhaustive segment → tenant map.
///
/// Lookups are ASCII case-insensitive. Iteration follows the order routes were supplied in.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<TenantRoute>,
    by_segment: FxHashMap<String, usize>,
}

impl RouteTable {
    /// Builds a table, rejecting empty or duplicate segments and malformed prefixes.
    ///
    /// # Errors
    /// * [`TenancyError::DuplicateSegment`] if two routes share a segment (case-insensitive).
    /// * [`TenancyError::InvalidRoute`] for empty segments, segments containing `/`,
    ///   or prefixes that do not start with `/`.
    pub fn new(routes: impl IntoIterator<Item = TenantRoute>) -> Result<Self, TenancyError> {
        let mut table = Self::default();
        for route in routes {
            table.insert(route)?;
        }
        Ok(table)
    }

    fn insert(&mut self, mut route: TenantRoute) -> Result<(), TenancyError> {
        let segment = route.segment.trim().to_ascii_lowercase();
        if segment.is_empty() || segment.contains('/') {
            return Err(TenancyError::InvalidRoute {
                message: format!("segment '{}' must be a single non-empty path segment", route.segment)
                    .into(),
                context: Some(route.tenant.to_string().into()),
            });
        }

        let prefix = route.prefix.trim_end_matches('/');
        if !prefix.starts_with('/') {
            return Err(TenancyError::InvalidRoute {
                message: format!("prefix '{}' must start with '/'", route.prefix).into(),
                context: Some(segment.into()),
            });
        }
        route.prefix = prefix.to_owned();

        if self.by_segment.contains_key(&segment) {
            return Err(TenancyError::DuplicateSegment { segment, context: None });
        }

        route.segment.clone_from(&segment);
        self.by_segment.insert(segment, self.routes.len());
        self.routes.push(route);
        Ok(())
    }

    /// Looks up the route registered for a first path segment.
    pub fn get(&self, segment: &str) -> Option<&TenantRoute> {
        let idx = if segment.bytes().any(|b| b.is_ascii_uppercase()) {
            self.by_segment.get(&segment.to_ascii_lowercase())
        } else {
            self.by_segment.get(segment)
        };
        idx.map(|&i| &self.routes[i])
    }

    /// All link prefixes that belong to `tenant`, deduplicated, in table order.
    pub fn prefixes_for(&self, tenant: &TenantId) -> Vec<String> {
        let mut prefixes: Vec<String> = Vec::new();
        for route in self.routes.iter().filter(|r| &r.tenant == tenant) {
            if !prefixes.contains(&route.prefix) {
                prefixes.push(route.prefix.clone());
            }
        }
        prefixes
    }

    pub fn routes(&self) -> &[TenantRoute] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
