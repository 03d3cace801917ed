//! Infrastructure layer module
//!
//! This module contains the adapters that touch the outside world:
//! - Configuration bundle loading and validation
//! - Host settings (figment layering)
//! - Logging infrastructure

pub mod config;
pub mod logging;
