//! Editor settings
//!
//! Settings are split into two sections:
//! - Shape limits (handle size, minimum sizes, connector hit-testing)
//! - History (undo depth)
//!
//! Both JSON and TOML files are supported, chosen by file extension.

use floorplan_core::ShapeLimits;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, SettingsResult};

/// Settings format version written by this crate
pub const SETTINGS_VERSION: &str = "1.0";

/// Undo history settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Maximum number of undoable commands; unbounded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default = "default_version")]
    pub version: String,
    /// Hit-testing and sizing limits handed to the shape factory
    #[serde(default)]
    pub shapes: ShapeLimits,
    #[serde(default)]
    pub history: HistorySettings,
}

fn default_version() -> String {
    SETTINGS_VERSION.to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            shapes: ShapeLimits::default(),
            history: HistorySettings::default(),
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

impl EditorSettings {
    /// Create settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        debug!("Saved settings to {}", path.display());

        Ok(())
    }

    /// Load from `path` when it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.shapes;
        let sizes = [
            ("shapes.handle_size", limits.handle_size),
            ("shapes.min_resize", limits.min_resize),
            ("shapes.text_min_width", limits.text_min_width),
            ("shapes.text_min_height", limits.text_min_height),
            ("shapes.connector_hit_threshold", limits.connector_hit_threshold),
        ];
        for (key, value) in sizes {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        if limits.curve_segments == 0 {
            return Err(ConfigError::out_of_range("shapes.curve_segments", 0));
        }

        let ratio = limits.curve_offset_ratio;
        if ratio.is_nan() || ratio <= 0.0 || ratio > 1.0 {
            return Err(ConfigError::out_of_range("shapes.curve_offset_ratio", ratio));
        }

        if self.history.max_depth == Some(0) {
            return Err(ConfigError::out_of_range("history.max_depth", 0));
        }

        Ok(())
    }
}

/// Platform settings path: `<config_dir>/floorplan/settings.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::ConfigDirectory("no configuration directory on this platform".to_string())
    })?;
    Ok(dir.join("floorplan").join("settings.json"))
}
