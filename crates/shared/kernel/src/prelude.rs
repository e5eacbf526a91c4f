pub use crate::error::{ContextSlot, ResultExt, format_context};
#[cfg(feature = "server")]
pub use crate::server::{ApiError, ApiState};
pub use wpt_domain::brand::{Brand, BrandConfig};
pub use wpt_domain::config::ApiConfig;
pub use wpt_domain::registry::{FeatureSlice, InitializedSlice};
pub use wpt_domain::tenant::{ResolutionPolicy, TenantId, TenantRoute};
