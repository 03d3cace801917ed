//! Implementation of the `rig-config paths` command.

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::ResolvedConfig;

/// One validated path
#[derive(Debug, serde::Serialize)]
pub struct PathEntry {
    /// What the path is
    pub label: String,
    /// The path itself
    pub path: PathBuf,
}

/// Every path the loader validated
#[derive(Debug, serde::Serialize)]
#[serde(transparent)]
pub struct PathsOutput {
    /// Labelled paths
    pub paths: Vec<PathEntry>,
}

impl PathsOutput {
    /// Collect the validated paths of a loaded bundle
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let paths = config
            .validated_paths()
            .into_iter()
            .map(|(label, path)| PathEntry {
                label,
                path: path.to_path_buf(),
            })
            .collect();
        Self { paths }
    }
}

impl CommandOutput for PathsOutput {
    fn to_human(&self) -> String {
        let width = self.paths.iter().map(|entry| entry.label.len()).max().unwrap_or(0);
        self.paths
            .iter()
            .map(|entry| format!("{:<width$}  {}", entry.label, entry.path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print the validated paths of `config`
pub fn execute(config: &ResolvedConfig, json_mode: bool) -> Result<()> {
    output(&PathsOutput::from_config(config), json_mode);
    Ok(())
}
