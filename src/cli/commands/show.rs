//! Implementation of the `rig-config show` command.

use anyhow::Result;

use crate::cli::output::{key_value_table, output, CommandOutput};
use crate::domain::models::ResolvedConfig;

/// Every resolved field of a bundle
#[derive(Debug, serde::Serialize)]
#[serde(transparent)]
pub struct ShowOutput<'a> {
    /// Loaded bundle
    pub config: &'a ResolvedConfig,
}

impl ShowOutput<'_> {
    fn rows(&self) -> Vec<(String, String)> {
        let config = self.config;
        let mut rows = vec![
            ("base_dir".to_string(), config.base_dir().display().to_string()),
            ("camera.name".to_string(), config.camera_name().to_string()),
            ("camera.dir".to_string(), config.camera_dir().display().to_string()),
            (
                "camera.coefficients".to_string(),
                config.camera_coefficients_path().display().to_string(),
            ),
            (
                "detector.two_step_approach".to_string(),
                config.detector_two_step_approach().to_string(),
            ),
            (
                "detector.time_out".to_string(),
                config.detector_time_out().to_string(),
            ),
        ];
        rows.extend(config.detector_configs().iter().map(|(name, path)| {
            (format!("detector.configs.{name}"), path.display().to_string())
        }));
        rows.push(("robot.plug_type".to_string(), config.robot_plug_type().to_string()));
        rows
    }
}

impl CommandOutput for ShowOutput<'_> {
    fn to_human(&self) -> String {
        key_value_table(("Field", "Value"), self.rows()).to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.config).unwrap_or_default()
    }
}

/// Print every field of `config`
pub fn execute(config: &ResolvedConfig, json_mode: bool) -> Result<()> {
    output(&ShowOutput { config }, json_mode);
    Ok(())
}
