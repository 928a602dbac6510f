//! Overlay settings
//!
//! Settings live in a JSON file with PascalCase keys. Every key is optional;
//! anything missing takes its default. The file is read once at startup and
//! the resulting [`OverlayConfig`] never changes for the session.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::placement::{IconAnchor, PlacementConfig, MAX_ICON_SCALE};

/// Directory name under the platform config dir
const CONFIG_DIR_NAME: &str = "fish-donation-overlay";
const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_ICON_SCALE: f32 = 2.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OverlayConfig {
    /// Master switch for every indicator
    pub show_donation_status: bool,
    pub use_text_indicator: bool,
    pub use_icon_indicator: bool,
    pub donated_text: String,
    pub not_donated_text: String,

    pub icon_position: IconAnchor,
    pub icon_offset_x: i32,
    pub icon_offset_y: i32,
    pub icon_scale: f32,
    pub show_icon_background: bool,

    pub debug_logging: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            show_donation_status: true,
            use_text_indicator: false,
            use_icon_indicator: true,
            donated_text: "✓ Donated".to_string(),
            not_donated_text: "! Not Donated".to_string(),
            icon_position: IconAnchor::TopRight,
            icon_offset_x: 0,
            icon_offset_y: 0,
            icon_scale: DEFAULT_ICON_SCALE,
            show_icon_background: true,
            debug_logging: false,
        }
    }
}

impl OverlayConfig {
    /// Loads settings from `path`, writing defaults there if it does not exist
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            let config = OverlayConfig::default();
            config.save(path)?;
            info!(path = %path.display(), "wrote default overlay settings");
            return Ok(config);
        }

        let json = fs::read_to_string(path)?;
        let config: OverlayConfig = serde_json::from_str(&json)?;
        Ok(config.sanitized())
    }

    /// Writes these settings as pretty JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Replaces values that would break placement math
    fn sanitized(mut self) -> Self {
        let scale = self.icon_scale;
        if !(scale.is_finite() && scale > 0.0 && scale <= MAX_ICON_SCALE) {
            warn!(scale, max = MAX_ICON_SCALE, "IconScale out of range, using default");
            self.icon_scale = DEFAULT_ICON_SCALE;
        }
        self
    }

    /// Placement options derived from these settings
    pub fn placement(&self) -> PlacementConfig {
        PlacementConfig {
            anchor: self.icon_position,
            offset_x: self.icon_offset_x,
            offset_y: self.icon_offset_y,
            scale: self.icon_scale,
            show_background: self.show_icon_background,
        }
    }

    /// True if any indicator can be drawn at all
    pub fn any_indicator_enabled(&self) -> bool {
        self.show_donation_status && (self.use_icon_indicator || self.use_text_indicator)
    }
}

/// Platform settings location, e.g. `~/.config/fish-donation-overlay/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = OverlayConfig::load_or_create(&path).unwrap();
        assert_eq!(config, OverlayConfig::default());
        assert!(path.exists());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"ShowDonationStatus\": true"));
        assert!(written.contains("\"IconPosition\": \"TopRight\""));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "IconPosition": "BottomLeft", "IconOffsetX": -4 }"#).unwrap();

        let config = OverlayConfig::load_or_create(&path).unwrap();
        assert_eq!(config.icon_position, IconAnchor::BottomLeft);
        assert_eq!(config.icon_offset_x, -4);
        assert!(config.show_donation_status);
        assert_eq!(config.icon_scale, 2.0);
    }

    #[test]
    fn test_non_positive_scale_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "IconScale": -1.0 }"#).unwrap();

        let config = OverlayConfig::load_or_create(&path).unwrap();
        assert_eq!(config.icon_scale, DEFAULT_ICON_SCALE);
    }

    #[test]
    fn test_oversized_scale_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "IconScale": 1e9 }"#).unwrap();

        let config = OverlayConfig::load_or_create(&path).unwrap();
        assert_eq!(config.icon_scale, DEFAULT_ICON_SCALE);

        fs::write(&path, r#"{ "IconScale": 64.0 }"#).unwrap();
        let config = OverlayConfig::load_or_create(&path).unwrap();
        assert_eq!(config.icon_scale, MAX_ICON_SCALE);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ \"IconPosition\": \"Middle\" }").unwrap();

        assert!(matches!(
            OverlayConfig::load_or_create(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_placement_mirrors_icon_settings() {
        let config = OverlayConfig {
            icon_position: IconAnchor::FollowCursor,
            icon_offset_x: 3,
            icon_offset_y: 7,
            icon_scale: 1.0,
            show_icon_background: false,
            ..Default::default()
        };
        let placement = config.placement();
        assert_eq!(placement.anchor, IconAnchor::FollowCursor);
        assert_eq!((placement.offset_x, placement.offset_y), (3, 7));
        assert_eq!(placement.icon_size(), 32);
        assert!(!placement.show_background);
    }

    #[test]
    fn test_indicator_switches() {
        let mut config = OverlayConfig::default();
        assert!(config.any_indicator_enabled());

        config.use_icon_indicator = false;
        assert!(!config.any_indicator_enabled());

        config.use_text_indicator = true;
        assert!(config.any_indicator_enabled());

        config.show_donation_status = false;
        assert!(!config.any_indicator_enabled());
    }
}
