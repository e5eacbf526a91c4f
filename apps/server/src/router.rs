use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};
use wpt::kernel::prelude::ApiState;

#[derive(OpenApi)]
#[openapi(
    info(title = "Waypoint API", description = "Tenant and brand resolution"),
    tags(
        (name = "System", description = "Service health"),
        (name = "Tenancy", description = "Tenant route table and link scoping"),
        (name = "Branding", description = "Brand context, navigation and footer"),
        (name = "Access", description = "Protected page guard"),
    )
)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(wpt::server::router::system_router())
        .merge(wpt::server::router::api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new().merge(openapi_routes).merge(scalar_routes)
}
