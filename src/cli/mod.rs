//! Command-line front-end
//!
//! [`run`] is the startup routine: it resolves the host settings, installs
//! logging, performs the single bundle load and passes the result to the
//! selected command.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use anyhow::{Context, Result};
use tracing::debug;

use crate::infrastructure::config::{ConfigLoader, Settings, SettingsLoader};
use crate::infrastructure::logging::LoggerImpl;

/// Merge command-line flags over the loaded settings
pub fn apply_overrides(mut settings: Settings, cli: &Cli) -> Result<Settings> {
    if let Some(ref base_dir) = cli.base_dir {
        settings.base_dir = Some(base_dir.clone());
    }
    if let Some(ref level) = cli.log_level {
        settings.logging.level.clone_from(level);
    }
    SettingsLoader::validate(&settings)?;
    Ok(settings)
}

/// Run the CLI to completion
pub fn run(cli: Cli) -> Result<()> {
    let settings = apply_overrides(SettingsLoader::load()?, &cli)?;
    let _logger = LoggerImpl::init(&settings.logging)?;

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let base_dir = settings.resolve_base_dir(&cwd);
    debug!(base_dir = %base_dir.display(), "resolved bundle directory");

    let config = ConfigLoader::load(&base_dir)
        .with_context(|| format!("Invalid configuration bundle at {}", base_dir.display()))?;

    match cli.command {
        Commands::Check => commands::check::execute(&config, cli.json),
        Commands::Show => commands::show::execute(&config, cli.json),
        Commands::Paths => commands::paths::execute(&config, cli.json),
    }
}

/// Report a fatal error and exit with status 1
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        let body = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": chain.get(1..).unwrap_or_default(),
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::try_parse_from([
            "rig-config",
            "check",
            "--base-dir",
            "/opt/bundle",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let settings = apply_overrides(Settings::default(), &cli).unwrap();
        assert_eq!(settings.base_dir, Some(PathBuf::from("/opt/bundle")));
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn test_settings_kept_without_flags() {
        let cli = Cli::try_parse_from(["rig-config", "show"]).unwrap();
        let settings = Settings {
            base_dir: Some(PathBuf::from("bundle")),
            ..Default::default()
        };

        let merged = apply_overrides(settings.clone(), &cli).unwrap();
        assert_eq!(merged, settings);
    }

    #[test]
    fn test_invalid_log_level_flag_is_rejected() {
        let cli = Cli::try_parse_from(["rig-config", "check", "--log-level", "verbose"]).unwrap();
        assert!(apply_overrides(Settings::default(), &cli).is_err());
    }
}
