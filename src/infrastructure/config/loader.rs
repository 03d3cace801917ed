//! Bundle loading and path validation

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::domain::models::layout;
use crate::domain::models::{
    ConfigDocument, DetectorSection, ResolvedConfig, DETECTOR_KEY_PREFIX,
};

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An expected directory is absent
    #[error("Can't find directory with path {}", path.display())]
    MissingDirectory {
        /// Directory that was checked
        path: PathBuf,
    },

    /// An expected regular file is absent
    #[error("Can't find file with path {}", path.display())]
    MissingFile {
        /// File that was checked
        path: PathBuf,
    },

    /// The YAML document is unreadable, malformed, or does not match the schema
    #[error("Error while reading {} configuration: {message}", path.display())]
    Parse {
        /// Document that failed
        path: PathBuf,
        /// Underlying reader or parser message
        message: String,
    },
}

impl ConfigError {
    /// Path the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingDirectory { path }
            | Self::MissingFile { path }
            | Self::Parse { path, .. } => path,
        }
    }
}

/// Loader for the configuration bundle
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate the bundle rooted at `base_dir`
    ///
    /// Checks, in order:
    /// 1. `camera_info/`, `detector/` and `robot/` exist
    /// 2. `config_data.yaml` exists and parses
    /// 3. the named camera directory and its `coefficients.toml` exist
    /// 4. every `detector_*` entry names an existing file under `detector/`
    /// 5. `robot/ur_control.toml` and `robot/ur_pilot.toml` exist
    ///
    /// The first failed check aborts the load.
    #[instrument(skip_all, fields(base_dir = %base_dir.as_ref().display()))]
    pub fn load(base_dir: impl AsRef<Path>) -> Result<ResolvedConfig, ConfigError> {
        let base_dir = base_dir.as_ref();

        let robot_dir = base_dir.join(layout::ROBOT_DIR);
        let detector_dir = base_dir.join(layout::DETECTOR_DIR);
        let camera_info_dir = base_dir.join(layout::CAMERA_INFO_DIR);
        // Alphabetical order
        for dir in [&camera_info_dir, &detector_dir, &robot_dir] {
            require_dir(dir)?;
        }

        let config_path = base_dir.join(layout::CONFIG_FILE);
        let document = Self::parse_document(&config_path)?;

        // Camera
        let camera_name = document.camera.name;
        let camera_root = camera_info_dir.join(&camera_name);
        require_dir(&camera_root)?;
        let camera_dir = camera_root.join(layout::CALIBRATION_DIR);
        let camera_coefficients_path = camera_dir.join(layout::COEFFICIENTS_FILE);
        require_file(&camera_coefficients_path)?;

        // Detector
        let detector_configs =
            resolve_detector_configs(&document.detector, &detector_dir, &config_path)?;

        // Robot
        let robot_control_path = robot_dir.join(layout::ROBOT_CONTROL_FILE);
        let robot_pilot_path = robot_dir.join(layout::ROBOT_PILOT_FILE);
        require_file(&robot_control_path)?;
        require_file(&robot_pilot_path)?;

        let config = ResolvedConfig {
            base_dir: base_dir.to_path_buf(),
            robot_dir,
            detector_dir,
            camera_info_dir,
            camera_name,
            camera_dir,
            camera_coefficients_path,
            detector_two_step_approach: document.detector.two_step_approach,
            detector_time_out: document.detector.time_out,
            detector_configs,
            robot_plug_type: document.robot.plug_type,
            robot_control_path,
            robot_pilot_path,
        };

        info!(
            camera = %config.camera_name,
            detector_variants = config.detector_configs.len(),
            plug_type = %config.robot_plug_type,
            "configuration bundle loaded"
        );

        Ok(config)
    }

    /// Parse `config_data.yaml` without checking the paths it references
    pub fn parse_document(path: impl AsRef<Path>) -> Result<ConfigDocument, ConfigError> {
        let path = path.as_ref();
        require_file(path)?;

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn resolve_detector_configs(
    detector: &DetectorSection,
    detector_dir: &Path,
    config_path: &Path,
) -> Result<BTreeMap<String, PathBuf>, ConfigError> {
    let mut configs = Vec::new();

    for (name, value) in detector.variants() {
        let file_name = value.as_str().ok_or_else(|| ConfigError::Parse {
            path: config_path.to_path_buf(),
            message: format!(
                "detector.{DETECTOR_KEY_PREFIX}{name}: expected a file name, found {value:?}"
            ),
        })?;
        configs.push((name.to_string(), detector_dir.join(file_name)));
    }

    // Checked in document order
    for (_, path) in &configs {
        require_file(path)?;
    }

    Ok(configs.into_iter().collect())
}

fn require_dir(path: &Path) -> Result<(), ConfigError> {
    debug!(path = %path.display(), "checking directory");
    if path.is_dir() {
        Ok(())
    } else {
        Err(ConfigError::MissingDirectory {
            path: path.to_path_buf(),
        })
    }
}

fn require_file(path: &Path) -> Result<(), ConfigError> {
    debug!(path = %path.display(), "checking file");
    if path.is_file() {
        Ok(())
    } else {
        Err(ConfigError::MissingFile {
            path: path.to_path_buf(),
        })
    }
}
