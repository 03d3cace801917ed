//! rig-config - configuration bundle loader for a robot cell
//!
//! A bundle is a directory holding `config_data.yaml` plus the camera
//! calibration, detector and robot files it refers to. [`ConfigLoader::load`]
//! reads the YAML document, checks every referenced directory and file, and
//! returns an immutable [`ResolvedConfig`]. The host program calls it once at
//! startup and passes the value down.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): bundle layout and configuration models
//! - **Infrastructure Layer** (`infrastructure`): loading, settings, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use rig_config::ConfigLoader;
//!
//! let config = ConfigLoader::load("/etc/cell/config")?;
//! println!("camera: {}", config.camera_name());
//! # Ok::<(), rig_config::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{detector_variant_name, ConfigDocument, ResolvedConfig};
pub use infrastructure::config::{
    ConfigError, ConfigLoader, Settings, SettingsError, SettingsLoader,
};
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl};
