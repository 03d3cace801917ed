//! Domain layer for the configuration bundle
//!
//! This module contains the bundle layout and the typed configuration models.

pub mod models;
