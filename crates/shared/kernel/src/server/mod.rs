//! Shared Axum plumbing: application state, system routes and the JSON error response.

mod error;
mod health;
pub mod router;
mod state;

pub use error::{ApiError, ErrorBody, required};
pub use health::HealthResponse;
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};
