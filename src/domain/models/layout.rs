//! Fixed names of the directories and files that make up a configuration bundle.
//!
//! ```text
//! <base_dir>/
//! ├── config_data.yaml
//! ├── camera_info/<camera_name>/calibration/coefficients.toml
//! ├── detector/<one file per detector_* entry>
//! └── robot/{ur_control.toml, ur_pilot.toml}
//! ```

/// Name of the YAML document at the root of the bundle
pub const CONFIG_FILE: &str = "config_data.yaml";

/// Robot settings directory
pub const ROBOT_DIR: &str = "robot";

/// Detector settings directory
pub const DETECTOR_DIR: &str = "detector";

/// Per-camera calibration data directory
pub const CAMERA_INFO_DIR: &str = "camera_info";

/// Calibration sub-directory inside a named camera directory
pub const CALIBRATION_DIR: &str = "calibration";

/// Camera intrinsics file inside the calibration directory
pub const COEFFICIENTS_FILE: &str = "coefficients.toml";

/// UR control settings under the robot directory
pub const ROBOT_CONTROL_FILE: &str = "ur_control.toml";

/// UR pilot settings under the robot directory
pub const ROBOT_PILOT_FILE: &str = "ur_pilot.toml";
