//! Application configuration schemas.
//!
//! Configuration is deserialized from an optional TOML file merged with
//! `YATORI__`-prefixed environment variables via the `config` crate.
//! Every field has a default, so an empty configuration is valid.

pub mod activation;
pub mod link;
pub mod logging;

use serde::{Deserialize, Serialize};
use validator::Validate;

use self::activation::ActivationConfig;
use self::link::LinkConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Default configuration file, looked up relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/default";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Link composition and validation settings.
    #[validate(nested)]
    pub link: LinkConfig,
    /// Activation service settings.
    #[validate(nested)]
    pub activation: ActivationConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load and validate configuration.
    ///
    /// An explicit `path` must exist. Without one, `config/default.toml` is
    /// used if present. Environment variables such as
    /// `YATORI__LINK__NETWORK=devnet` override file values.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let file = match path {
            Some(path) => config::File::with_name(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("YATORI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}
