//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "rig-config")]
#[command(about = "Load and validate a camera/detector/robot configuration bundle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Bundle directory (overrides RIG_CONFIG_BASE_DIR and rig-config.yaml)
    #[arg(short, long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Validate the bundle and print a summary
    Check,

    /// Print every resolved configuration field
    Show,

    /// List every path the loader validated
    Paths,
}
