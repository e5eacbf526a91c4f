//! HTTP endpoints for brand context, navigation and footer.

use crate::{BrandFlags, Branding, FooterView, NavigationRequest, NavigationView};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use wpt_kernel::domain::brand::{Brand, BrandConfig};
use wpt_kernel::domain::constants::BRANDING_TAG;
use wpt_kernel::server::{ApiError, ApiState, ErrorBody, required};
use wpt_tenancy::{Resolution, Tenancy};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PathQuery {
    /// Current pathname.
    path: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub path: String,
    pub resolution: Resolution,
    /// Absent when branding is not available.
    pub brand: Option<Brand>,
    pub flags: BrandFlags,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandResponse {
    pub brand: Brand,
    pub flags: BrandFlags,
    pub config: BrandConfig,
}

fn slices(state: &ApiState) -> Result<(&Tenancy, &Branding), ApiError> {
    Ok((state.try_get_slice::<Tenancy>()?, state.try_get_slice::<Branding>()?))
}

#[utoipa::path(
    get,
    path = "/api/v1/resolve",
    params(PathQuery),
    responses(
        (status = OK, description = "Tenant scope and brand for a pathname", body = ResolveResponse),
        (status = BAD_REQUEST, body = ErrorBody),
    ),
    tag = BRANDING_TAG,
)]
async fn resolve_handler(
    State(state): State<ApiState>,
    query: Result<Query<PathQuery>, QueryRejection>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let Query(query) = query?;
    let path = required(query.path.as_deref(), "path")?;
    let tenancy = state.try_get_slice::<Tenancy>()?;

    let response = match state.get_slice::<Branding>() {
        Some(branding) => {
            let ctx = branding.context(tenancy, path);
            ResolveResponse {
                path: path.to_owned(),
                brand: Some(ctx.brand()),
                flags: ctx.flags(),
                resolution: ctx.resolution().clone(),
            }
        },
        None => ResolveResponse {
            path: path.to_owned(),
            resolution: tenancy.resolve(path),
            brand: None,
            flags: BrandFlags::default(),
        },
    };
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/v1/brand",
    params(PathQuery),
    responses(
        (status = OK, description = "Active brand configuration", body = BrandResponse),
        (status = BAD_REQUEST, body = ErrorBody),
    ),
    tag = BRANDING_TAG,
)]
async fn brand_handler(
    State(state): State<ApiState>,
    query: Result<Query<PathQuery>, QueryRejection>,
) -> Result<Json<BrandResponse>, ApiError> {
    let Query(query) = query?;
    let path = required(query.path.as_deref(), "path")?;
    let (tenancy, branding) = slices(&state)?;

    let ctx = branding.context(tenancy, path);
    Ok(Json(BrandResponse { brand: ctx.brand(), flags: ctx.flags(), config: ctx.config().clone() }))
}

#[utoipa::path(
    get,
    path = "/api/v1/navigation",
    params(NavigationRequest),
    responses(
        (status = OK, description = "Navigation bar view", body = NavigationView),
        (status = BAD_REQUEST, body = ErrorBody),
    ),
    tag = BRANDING_TAG,
)]
async fn navigation_handler(
    State(state): State<ApiState>,
    query: Result<Query<NavigationRequest>, QueryRejection>,
) -> Result<Json<NavigationView>, ApiError> {
    let Query(request) = query?;
    required(Some(request.path.as_str()), "path")?;

    let Ok((tenancy, branding)) = slices(&state) else {
        tracing::warn!(path = %request.path, "Branding unavailable, serving skeleton navigation");
        return Ok(Json(NavigationView::skeleton()));
    };
    Ok(Json(branding.navigation(tenancy, &request)))
}

#[utoipa::path(
    get,
    path = "/api/v1/footer",
    params(PathQuery),
    responses(
        (status = OK, description = "Footer view", body = FooterView),
        (status = BAD_REQUEST, body = ErrorBody),
    ),
    tag = BRANDING_TAG,
)]
async fn footer_handler(
    State(state): State<ApiState>,
    query: Result<Query<PathQuery>, QueryRejection>,
) -> Result<Json<FooterView>, ApiError> {
    let Query(query) = query?;
    let path = required(query.path.as_deref(), "path")?;
    let (tenancy, branding) = slices(&state)?;
    Ok(Json(branding.footer(tenancy, path)))
}

/// Branding routes.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(resolve_handler))
        .routes(routes!(brand_handler))
        .routes(routes!(navigation_handler))
        .routes(routes!(footer_handler))
}
