use crate::error::{ContextSlot, format_context};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`WPT__SERVER__PORT=8080`).
pub const ENV_PREFIX: &str = "WPT";

/// Error raised while loading layered configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

impl ContextSlot for ConfigError {
    fn context_slot(&mut self) -> Option<&mut Option<Cow<'static, str>>> {
        match self {
            Self::Config { context, .. } => Some(context),
        }
    }
}

fn with_context(context: &'static str) -> impl FnOnce(config::ConfigError) -> ConfigError {
    move |source| ConfigError::Config { source, context: Some(context.into()) }
}

/// Loads a configuration file and overlays `WPT__`-prefixed environment variables.
///
/// 1. **Base File**: `path` (any format `config` understands, extension optional).
///    Defaults to `server` in the working directory. The file is required.
/// 2. **Environment Overrides**: nested keys use a double underscore, e.g.
///    `WPT__TENANCY__POLICY=two-letter` maps to `tenancy.policy`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or the merged layers do not
/// deserialize into `T`.
///
/// # Example
/// ```rust
/// use wpt_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("access.platform_prefixes")
                .try_parsing(true),
        );

    info!("Loading config from {}", effective_path.display());

    builder
        .build()
        .map_err(with_context("Failed to build config"))?
        .try_deserialize::<T>()
        .map_err(with_context("Failed to deserialize config"))
}
