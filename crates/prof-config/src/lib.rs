//! # prof-config
//!
//! Layered configuration loading for Professor Search using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PROFSEARCH_*` prefix, `__` as separator)
//! 2. Project-level `.profsearch/config.toml`
//! 3. User-level `~/.config/profsearch/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PROFSEARCH_API__BASE_URL` -> `api.base_url`,
//! `PROFSEARCH_GENERAL__PAGE_SIZE` -> `general.page_size`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use prof_config::ProfConfig;
//!
//! let config = ProfConfig::load_with_dotenv().expect("config");
//!
//! if config.api.is_configured() {
//!     println!("Backend: {}", config.api.api_root().expect("api root"));
//! }
//! ```

mod api;
mod error;
mod general;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, MAX_FOLLOW_UP_DAYS};
pub use session::{SessionBackend, SessionConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment prefix for every override.
pub const ENV_PREFIX: &str = "PROFSEARCH_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ProfConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a value
    /// has the wrong type, and [`ConfigError::InvalidValue`] if a `general`
    /// value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config

        let local_path = PathBuf::from(".profsearch/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("profsearch").join("config.toml"))
    }
}
