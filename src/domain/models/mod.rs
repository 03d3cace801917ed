//! Bundle layout and configuration models

pub mod document;
pub mod layout;
pub mod resolved_config;

pub use document::{
    detector_variant_name, CameraSection, ConfigDocument, DetectorSection, RobotSection,
    DETECTOR_KEY_PREFIX,
};
pub use resolved_config::ResolvedConfig;
