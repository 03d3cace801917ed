//! Common test utilities for integration tests
//!
//! Provides a builder for on-disk configuration bundles.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CAMERA_NAME: &str = "realsense_d435";

pub const VALID_CONFIG: &str = r"
camera:
  name: realsense_d435
detector:
  two_step_approach: true
  time_out: 5
  detector_charger: charger.toml
  detector_socket: socket.toml
robot:
  plug_type: type2_female
";

/// A complete, valid bundle in a temporary directory
///
/// Dropping the fixture removes the directory.
pub struct BundleFixture {
    dir: TempDir,
    root: PathBuf,
}

impl BundleFixture {
    pub fn new() -> Self {
        Self::with_config(VALID_CONFIG)
    }

    /// Full directory tree for `VALID_CONFIG`, with `config` as the document
    pub fn with_config(config: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        // Canonical, so it matches the working directory a child process sees
        let root = dir.path().canonicalize().expect("Failed to resolve temp dir");
        let fixture = Self { dir, root };

        fixture.write("robot/ur_control.toml", "host = \"192.168.1.10\"\n");
        fixture.write("robot/ur_pilot.toml", "speed = 0.25\n");
        fixture.write("detector/charger.toml", "model = \"charger\"\n");
        fixture.write("detector/socket.toml", "model = \"socket\"\n");
        fixture.write(
            &format!("camera_info/{CAMERA_NAME}/calibration/coefficients.toml"),
            "fx = 615.0\nfy = 615.0\n",
        );
        fixture.write("config_data.yaml", config);
        fixture
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Write `content` to `relative`, creating parent directories
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
    }

    pub fn remove_file(&self, relative: &str) {
        fs::remove_file(self.join(relative)).expect("Failed to remove fixture file");
    }

    pub fn remove_dir(&self, relative: &str) {
        fs::remove_dir_all(self.join(relative)).expect("Failed to remove fixture directory");
    }
}

/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
