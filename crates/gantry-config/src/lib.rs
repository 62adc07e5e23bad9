//! # gantry-config
//!
//! Layered configuration loading for Gantry using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GANTRY_*` prefix, `__` as separator)
//! 2. Project-level `.gantry/config.toml`
//! 3. User-level `~/.config/gantry/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GANTRY_OUTPUT__INDENT` -> `output.indent`,
//! `GANTRY_AUGMENT__BOOTSTRAP_SCALARS` -> `augment.bootstrap_scalars`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use gantry_config::GantryConfig;
//!
//! let config = GantryConfig::load_with_dotenv().expect("config");
//! assert!(config.validate().is_ok());
//! ```

mod augment;
mod error;
mod output;

pub use augment::AugmentConfig;
pub use error::ConfigError;
pub use output::OutputConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GantryConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub augment: AugmentConfig,
}

impl GantryConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".gantry/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GANTRY_").split("__"))
    }

    /// Reject values that would corrupt the rendered schema text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.introspection_prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.introspection_prefix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.augment.introspection_prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "augment.introspection_prefix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.output.argument_separator.contains('\n') {
            return Err(ConfigError::InvalidValue {
                field: "output.argument_separator".to_string(),
                reason: "must not contain a newline".to_string(),
            });
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gantry").join("config.toml"))
    }
}
