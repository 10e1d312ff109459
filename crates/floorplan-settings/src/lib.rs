//! Floorplan Settings Crate
//!
//! Loads and saves the editor settings that configure the shape engine.

pub mod config;
pub mod error;

pub use config::{default_config_path, EditorSettings, HistorySettings, SETTINGS_VERSION};
pub use error::{ConfigError, SettingsError, SettingsResult};
