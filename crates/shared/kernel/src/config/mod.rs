use config::{Config, Environment, File};
use orbit_domain::config::ConsoleConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix for environment overrides (`ORBIT__LICENSE__EDITION=team`).
pub const ENV_PREFIX: &str = "ORBIT";

#[orbit_derive::orbit_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader.
///
/// 1. **Base file** (optional): `path` is read with its format inferred from the extension.
/// 2. **Environment**: variables prefixed with `ORBIT__` override file values; nested keys
///    are separated by double underscores (`ORBIT__APP__ACCOUNT_ID` → `app.account_id`).
///
/// Missing keys fall back to the target type's serde defaults.
///
/// # Errors
/// Returns [`ConfigError`] if the file is missing or unreadable, or if the merged values
/// do not deserialize into `T`.
pub fn load_config<T>(path: Option<&Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    layered(path, environment())
}

/// [`load_config`] for the console configuration tree.
///
/// # Errors
/// See [`load_config`].
pub fn load_console_config(path: Option<&Path>) -> Result<ConsoleConfig, ConfigError> {
    load_config(path)
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__").convert_case(config::Case::Snake)
}

fn layered<T>(path: Option<&Path>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();
    if let Some(path) = path {
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
