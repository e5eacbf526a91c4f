//! HTTP endpoint for route guard checks.

use crate::{Access, AccessDecision, GuardPolicy, Session};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use wpt_kernel::domain::constants::ACCESS_TAG;
use wpt_kernel::server::{ApiError, ApiState, ErrorBody, required};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessCheckRequest {
    /// Pathname of the protected page.
    pub path: String,
    #[serde(default)]
    pub session: Session,
    #[serde(default)]
    pub policy: GuardPolicy,
}

#[utoipa::path(
    post,
    path = "/api/v1/access/check",
    request_body = AccessCheckRequest,
    responses(
        (status = OK, description = "Guard decision", body = AccessDecision),
        (status = BAD_REQUEST, body = ErrorBody),
    ),
    tag = ACCESS_TAG,
)]
async fn check_handler(
    State(state): State<ApiState>,
    body: Result<Json<AccessCheckRequest>, JsonRejection>,
) -> Result<Json<AccessDecision>, ApiError> {
    let Json(request) = body?;
    let path = required(Some(request.path.as_str()), "path")?;
    let access = state.try_get_slice::<Access>()?;
    Ok(Json(access.guard(path, &request.session, &request.policy)))
}

/// Access routes.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(check_handler))
}
