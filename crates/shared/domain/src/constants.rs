//! Shared string constants (`OpenAPI` tags, well-known tenant segments and routes).

pub const SYSTEM_TAG: &str = "System";
pub const TENANCY_TAG: &str = "Tenancy";
pub const BRANDING_TAG: &str = "Branding";
pub const ACCESS_TAG: &str = "Access";

/// Canonical id of the Mato Grosso do Sul tenant.
pub const MS_TENANT: &str = "ms";
/// Short public alias of the MS tenant.
pub const DESCUBRA_MS_SEGMENT: &str = "descubrams";
/// Long public alias of the MS tenant, rewritten to [`DESCUBRA_MS_SEGMENT`].
pub const DESCUBRA_MS_LONG_SEGMENT: &str = "descubramatogrossodosul";

/// Tenant-relative page where partners register events.
pub const EVENT_REGISTRATION_PATH: &str = "/cadastrar-evento";
/// Global events landing page.
pub const EVENTS_PATH: &str = "/eventos";
/// Query marker set when the visitor arrives from the events landing page.
pub const FROM_EVENTS_QUERY: &str = "from=eventos";
