//! Serde schema of `config_data.yaml`

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Number, Value};

/// Key prefix marking a detector variant entry under `detector`
pub const DETECTOR_KEY_PREFIX: &str = "detector_";

/// Raw contents of `config_data.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfigDocument {
    /// Camera selection
    pub camera: CameraSection,

    /// Detector settings and variant entries
    pub detector: DetectorSection,

    /// Robot settings
    pub robot: RobotSection,
}

/// `camera` mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraSection {
    /// Name of the camera directory under `camera_info/`
    pub name: String,
}

/// `detector` mapping
///
/// Besides the two fixed keys, the mapping carries any number of
/// `detector_<variant>: <file name>` entries. Those and every other
/// unrecognized key end up in `entries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorSection {
    /// Run detection in two steps
    pub two_step_approach: bool,

    /// Detection time-out, kept as the number the YAML parser produced
    pub time_out: Number,

    /// Remaining keys of the mapping in document order, including the
    /// variant entries
    #[serde(flatten)]
    pub entries: Mapping,
}

impl DetectorSection {
    /// Iterate the `detector_*` entries as `(variant name, value)` pairs,
    /// in document order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().filter_map(|(key, value)| {
            key.as_str()
                .and_then(detector_variant_name)
                .map(|name| (name, value))
        })
    }
}

/// `robot` mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotSection {
    /// Connector/tool identifier of the robot
    pub plug_type: String,
}

/// Strip the leading `detector_` from a detector key.
///
/// Only the leading occurrence is removed: `detector_detector_x` maps to
/// `detector_x`. Keys without the prefix yield `None`.
pub fn detector_variant_name(key: &str) -> Option<&str> {
    key.strip_prefix(DETECTOR_KEY_PREFIX)
}
