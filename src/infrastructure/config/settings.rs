//! Settings of the host program

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::infrastructure::logging::LogConfig;

/// Optional settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "rig-config.yaml";

/// Prefix of environment variable overrides, `__` separates nested keys
pub const ENV_PREFIX: &str = "RIG_CONFIG_";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Log level outside trace..error
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// `base_dir` set to an empty path
    #[error("Base directory cannot be empty")]
    EmptyBaseDir,
}

/// Settings of the host program, separate from the bundle it loads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Bundle directory; the working directory when unset
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}

impl Settings {
    /// Bundle directory made absolute against `cwd`
    pub fn resolve_base_dir(&self, cwd: &Path) -> PathBuf {
        match &self.base_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        }
    }
}

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `rig-config.yaml` in the working directory (optional)
    /// 3. Environment variables (`RIG_CONFIG_*` prefix)
    pub fn load() -> Result<Settings> {
        Self::load_from_file(SETTINGS_FILE)
    }

    /// Load settings using a specific file in place of `rig-config.yaml`
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| {
                format!("Failed to load settings from {}", path.as_ref().display())
            })?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        let level = settings.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(SettingsError::InvalidLogLevel(
                settings.logging.level.clone(),
            ));
        }

        if settings
            .base_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(SettingsError::EmptyBaseDir);
        }

        Ok(())
    }
}
