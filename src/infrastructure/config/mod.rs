//! Configuration management infrastructure
//!
//! - `loader`: reads `config_data.yaml` and validates the bundle it describes
//! - `settings`: figment-layered settings of the host program (YAML file,
//!   environment variable overrides)

pub mod loader;
pub mod settings;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{Settings, SettingsError, SettingsLoader};
