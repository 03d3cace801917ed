//! The validated configuration bundle

use serde::Serialize;
use serde_yaml::Number;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Validated configuration bundle
///
/// Built only by [`ConfigLoader::load`](crate::ConfigLoader::load), after every
/// referenced directory and file has been checked. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub(crate) base_dir: PathBuf,
    pub(crate) robot_dir: PathBuf,
    pub(crate) detector_dir: PathBuf,
    pub(crate) camera_info_dir: PathBuf,
    pub(crate) camera_name: String,
    pub(crate) camera_dir: PathBuf,
    pub(crate) camera_coefficients_path: PathBuf,
    pub(crate) detector_two_step_approach: bool,
    pub(crate) detector_time_out: Number,
    pub(crate) detector_configs: BTreeMap<String, PathBuf>,
    pub(crate) robot_plug_type: String,
    pub(crate) robot_control_path: PathBuf,
    pub(crate) robot_pilot_path: PathBuf,
}

impl ResolvedConfig {
    /// Directory the bundle was loaded from
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `<base_dir>/robot`
    pub fn robot_dir(&self) -> &Path {
        &self.robot_dir
    }

    /// `<base_dir>/detector`
    pub fn detector_dir(&self) -> &Path {
        &self.detector_dir
    }

    /// `<base_dir>/camera_info`
    pub fn camera_info_dir(&self) -> &Path {
        &self.camera_info_dir
    }

    /// Camera name from `camera.name`
    pub fn camera_name(&self) -> &str {
        &self.camera_name
    }

    /// `camera_info/<camera_name>/calibration`
    pub fn camera_dir(&self) -> &Path {
        &self.camera_dir
    }

    /// Calibration coefficients file of the camera
    pub fn camera_coefficients_path(&self) -> &Path {
        &self.camera_coefficients_path
    }

    /// `detector.two_step_approach`
    pub fn detector_two_step_approach(&self) -> bool {
        self.detector_two_step_approach
    }

    /// Time-out exactly as written in the YAML document
    pub fn detector_time_out(&self) -> &Number {
        &self.detector_time_out
    }

    /// Time-out as seconds, for callers that do arithmetic with it
    pub fn detector_time_out_secs(&self) -> Option<f64> {
        self.detector_time_out.as_f64()
    }

    /// Detector variant name to settings file, ordered by name
    pub fn detector_configs(&self) -> &BTreeMap<String, PathBuf> {
        &self.detector_configs
    }

    /// Settings file of one detector variant
    pub fn detector_config(&self, variant: &str) -> Option<&Path> {
        self.detector_configs.get(variant).map(PathBuf::as_path)
    }

    /// `robot.plug_type`
    pub fn robot_plug_type(&self) -> &str {
        &self.robot_plug_type
    }

    /// `robot/ur_control.toml`
    pub fn robot_control_path(&self) -> &Path {
        &self.robot_control_path
    }

    /// `robot/ur_pilot.toml`
    pub fn robot_pilot_path(&self) -> &Path {
        &self.robot_pilot_path
    }

    /// Every path the loader validated, labelled by what it is
    pub fn validated_paths(&self) -> Vec<(String, &Path)> {
        let mut paths = vec![
            ("robot_dir".to_string(), self.robot_dir.as_path()),
            ("detector_dir".to_string(), self.detector_dir.as_path()),
            ("camera_info_dir".to_string(), self.camera_info_dir.as_path()),
            (
                "camera_coefficients".to_string(),
                self.camera_coefficients_path.as_path(),
            ),
        ];
        paths.extend(
            self.detector_configs
                .iter()
                .map(|(name, path)| (format!("detector.{name}"), path.as_path())),
        );
        paths.push(("robot_control".to_string(), self.robot_control_path.as_path()));
        paths.push(("robot_pilot".to_string(), self.robot_pilot_path.as_path()));
        paths
    }
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration with parent path: {}", self.base_dir.display())
    }
}
