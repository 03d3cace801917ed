//! CLI command implementations.

pub mod check;
pub mod paths;
pub mod show;
