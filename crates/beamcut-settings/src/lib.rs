//! # BeamCut Settings
//!
//! Exporter configuration: machine geometry, feed rates, sampling
//! parameters and G-code snippets, persisted as JSON or TOML with
//! validation on both load and save.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{SettingsError, SettingsResult};
