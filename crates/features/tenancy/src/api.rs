//! HTTP endpoints for route inspection.

use crate::{Resolution, Tenancy};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use wpt_kernel::domain::constants::TENANCY_TAG;
use wpt_kernel::domain::tenant::{ResolutionPolicy, TenantRoute};
use wpt_kernel::server::{ApiError, ApiState, ErrorBody, required};

/// Route table and active policy.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantsResponse {
    pub policy: ResolutionPolicy,
    pub routes: Vec<TenantRoute>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LinkQuery {
    /// Current pathname.
    path: Option<String>,
    /// Tenant-relative link target.
    target: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub href: String,
    pub resolution: Resolution,
}

pub(crate) fn tenancy(state: &ApiState) -> Result<&Tenancy, ApiError> {
    Ok(state.try_get_slice::<Tenancy>()?)
}

#[utoipa::path(
    get,
    path = "/api/v1/tenants",
    responses(
        (status = OK, description = "Configured tenant routes", body = TenantsResponse),
        (status = INTERNAL_SERVER_ERROR, body = ErrorBody),
    ),
    tag = TENANCY_TAG,
)]
async fn tenants_handler(State(state): State<ApiState>) -> Result<Json<TenantsResponse>, ApiError> {
    let tenancy = tenancy(&state)?;
    Ok(Json(TenantsResponse {
        policy: tenancy.policy(),
        routes: tenancy.table().routes().to_vec(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/link",
    params(LinkQuery),
    responses(
        (status = OK, description = "Tenant-scoped link", body = LinkResponse),
        (status = BAD_REQUEST, body = ErrorBody),
    ),
    tag = TENANCY_TAG,
)]
async fn link_handler(
    State(state): State<ApiState>,
    query: Result<Query<LinkQuery>, QueryRejection>,
) -> Result<Json<LinkResponse>, ApiError> {
    let Query(query) = query?;
    let path = required(query.path.as_deref(), "path")?;
    let target = required(query.target.as_deref(), "target")?;

    let tenancy = tenancy(&state)?;
    let resolution = tenancy.resolve(path);
    let href = crate::TenantLinks::for_resolution(&resolution, tenancy.table()).with_tenant(target);
    Ok(Json(LinkResponse { href, resolution }))
}

/// Tenancy routes.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(tenants_handler)).routes(routes!(link_handler))
}
