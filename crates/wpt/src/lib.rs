//! Facade crate for `Waypoint` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `wpt` with the `server` feature for HTTP schemas and routers.
//! - Call `wpt::init` to build every feature slice from one [`ApiConfig`].

pub use wpt_domain as domain;
use wpt_domain::config::ApiConfig;
use wpt_domain::registry::InitializedSlice;
pub use wpt_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        use utoipa_axum::router::OpenApiRouter;
        use wpt_kernel::server::ApiState;

        pub use wpt_kernel::server::router::system_router;

        /// Every feature router merged under one state.
        pub fn api_router() -> OpenApiRouter<ApiState> {
            OpenApiRouter::new()
                .merge(crate::features::tenancy::api::router())
                .merge(crate::features::branding::api::router())
                .merge(crate::features::access::api::router())
        }
    }
}

/// Feature crates, re-exported under one roof.
pub mod features {
    pub use wpt_access as access;
    pub use wpt_branding as branding;
    pub use wpt_tenancy as tenancy;
}

/// Any feature initialization failure.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Tenancy(#[from] features::tenancy::TenancyError),

    #[error(transparent)]
    Branding(#[from] features::branding::BrandingError),

    #[error(transparent)]
    Access(#[from] features::access::AccessError),
}

/// Initialize all features from `config`.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, InitError> {
    let mut slices = Vec::with_capacity(3);

    // Tenancy
    slices.push(features::tenancy::init(&config.tenancy)?);

    // Branding
    slices.push(features::branding::init(&config.branding)?);

    // Route guard
    slices.push(features::access::init(&config.access)?);

    Ok(slices)
}
