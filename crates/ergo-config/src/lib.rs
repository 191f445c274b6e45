//! # ergo-config
//!
//! Layered configuration loading for Ergo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ERGO_*` prefix, `__` as separator)
//! 2. Project-level `.ergo/config.toml`
//! 3. User-level `~/.config/ergo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ERGO_DB__PATH` -> `db.path`,
//! `ERGO_KIOSK__HEARTBEAT_STALE_SECS` -> `kiosk.heartbeat_stale_secs`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use ergo_config::ErgoConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = ErgoConfig::load_with_dotenv().expect("config");
//!
//! println!("database at {}", config.db.path);
//! ```

mod db;
mod error;
mod general;
mod kiosk;

pub use db::DbConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use kiosk::KioskConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ErgoConfig {
    #[serde(default)]
    pub db: DbConfig,
    #[serde(default)]
    pub kiosk: KioskConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ErgoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if figment extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if figment extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
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
        let local_path = PathBuf::from(".ergo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("ERGO_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ergo").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ErgoConfig::default();
        assert_eq!(config.db.path, "ergo.db");
        assert!(!config.kiosk.terminal);
        assert_eq!(config.kiosk.heartbeat_stale_secs, 300);
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: ErgoConfig = ErgoConfig::figment().extract()?;
            assert_eq!(config.db.path, "ergo.db");
            assert_eq!(config.general.default_limit, 20);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ERGO_DB__PATH", "/tmp/kiosk.db");
            jail.set_env("ERGO_KIOSK__HEARTBEAT_STALE_SECS", "60");
            let config: ErgoConfig = ErgoConfig::figment().extract()?;
            assert_eq!(config.db.path, "/tmp/kiosk.db");
            assert_eq!(config.kiosk.heartbeat_stale_secs, 60);
            Ok(())
        });
    }
}
