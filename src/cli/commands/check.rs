//! Implementation of the `rig-config check` command.

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::ResolvedConfig;

/// Summary of a successful load
#[derive(Debug, serde::Serialize)]
pub struct CheckOutput {
    /// Always true; failures exit before output
    pub success: bool,
    /// One-line verdict
    pub message: String,
    /// Bundle directory
    pub base_dir: PathBuf,
    /// Selected camera
    pub camera_name: String,
    /// Detector variant names, ordered by name
    pub detector_variants: Vec<String>,
    /// Robot plug type
    pub robot_plug_type: String,
}

impl CheckOutput {
    /// Summarize a loaded bundle
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            success: true,
            message: format!("{config} is valid"),
            base_dir: config.base_dir().to_path_buf(),
            camera_name: config.camera_name().to_string(),
            detector_variants: config.detector_configs().keys().cloned().collect(),
            robot_plug_type: config.robot_plug_type().to_string(),
        }
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let variants = if self.detector_variants.is_empty() {
            "none".to_string()
        } else {
            self.detector_variants.join(", ")
        };
        [
            self.message.clone(),
            format!("  camera:            {}", self.camera_name),
            format!("  detector variants: {variants}"),
            format!("  plug type:         {}", self.robot_plug_type),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print the summary of `config`
pub fn execute(config: &ResolvedConfig, json_mode: bool) -> Result<()> {
    output(&CheckOutput::from_config(config), json_mode);
    Ok(())
}
