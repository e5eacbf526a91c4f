//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading, the error-context helpers every slice
//! uses, and (behind `server`) the Axum state, health endpoint and error response.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use wpt_kernel::config::load_config;
//! let cfg: wpt_kernel::domain::config::ApiConfig = load_config(Some("server")).unwrap();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod error;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use wpt_domain as domain;
