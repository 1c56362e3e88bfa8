//! Configuration Management

use crate::tracking::detector::DetectorConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Camera settings
    #[serde(default)]
    pub capture: CaptureConfig,
    /// Hand detector settings
    #[serde(default)]
    pub tracking: DetectorConfig,
    /// Gesture thresholds
    #[serde(default)]
    pub gesture: GestureConfig,
    /// Screen mapping and smoothing
    #[serde(default)]
    pub mapping: MappingConfig,
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Camera device index
    pub camera_index: u32,
    /// Requested frame width in pixels
    pub frame_width: u32,
    /// Requested frame height in pixels
    pub frame_height: u32,
    /// Mirror the frame around the vertical axis before detection
    pub mirror: bool,
}

/// Gesture threshold configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Pinch distance below which a click fires (frame pixels)
    pub click_distance_px: f64,
}

/// Coordinate mapping configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Inset of the active region from every frame edge (frame pixels)
    pub frame_margin_px: f64,
    /// Smoothing divisor; larger is steadier but slower (must be > 1)
    pub smoothing: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            camera_index: 0,
            frame_width: 640,
            frame_height: 480,
            mirror: true,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_distance_px: 25.0,
        }
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            frame_margin_px: 80.0,
            smoothing: 5.0,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.capture.frame_width == 0 || self.capture.frame_height == 0 {
            return Err(crate::Error::Config(format!(
                "frame dimensions must be nonzero, got {}x{}",
                self.capture.frame_width, self.capture.frame_height
            )));
        }
        if self.tracking.max_hands != 1 {
            return Err(crate::Error::Config(format!(
                "max_hands must be 1 (multi-hand tracking is not supported), got {}",
                self.tracking.max_hands
            )));
        }
        if !(0.0..=1.0).contains(&self.tracking.detection_confidence) {
            return Err(crate::Error::Config(format!(
                "detection_confidence must be in [0, 1], got {}",
                self.tracking.detection_confidence
            )));
        }
        if self.gesture.click_distance_px <= 0.0 {
            return Err(crate::Error::Config(format!(
                "click_distance_px must be positive, got {}",
                self.gesture.click_distance_px
            )));
        }
        let min_dim = f64::from(self.capture.frame_width.min(self.capture.frame_height));
        if self.mapping.frame_margin_px < 0.0 || 2.0 * self.mapping.frame_margin_px >= min_dim {
            return Err(crate::Error::Config(format!(
                "frame_margin_px {} does not leave an active region in a {}x{} frame",
                self.mapping.frame_margin_px, self.capture.frame_width, self.capture.frame_height
            )));
        }
        if !(self.mapping.smoothing > 1.0) {
            return Err(crate::Error::Config(format!(
                "smoothing must be greater than 1, got {}",
                self.mapping.smoothing
            )));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".gesture_mouse").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.capture.camera_index, 0);
        assert_eq!(config.capture.frame_width, 640);
        assert_eq!(config.capture.frame_height, 480);
        assert!(config.capture.mirror);
        assert_eq!(config.tracking.max_hands, 1);
        assert_eq!(config.gesture.click_distance_px, 25.0);
        assert_eq!(config.mapping.frame_margin_px, 80.0);
        assert_eq!(config.mapping.smoothing, 5.0);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[capture]"));
        assert!(toml.contains("[tracking]"));
        assert!(toml.contains("[gesture]"));
        assert!(toml.contains("[mapping]"));
    }

    #[test]
    fn test_default_path() {
        let path = Config::default_path();
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_config_roundtrip_serialization() {
        let original = Config::default();
        let toml_str = original.to_toml().unwrap();
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");

        assert_eq!(original.capture.frame_width, deserialized.capture.frame_width);
        assert_eq!(
            original.gesture.click_distance_px,
            deserialized.gesture.click_distance_px
        );
        assert_eq!(original.mapping.smoothing, deserialized.mapping.smoothing);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("test_config.toml");

        let mut original = Config::default();
        original.capture.camera_index = 2;
        original.gesture.click_distance_px = 30.0;
        original.mapping.smoothing = 7.5;

        original.save(&config_path).expect("Failed to save config");
        assert!(config_path.exists());

        let loaded = Config::load(&config_path).expect("Failed to load config");
        assert_eq!(loaded.capture.camera_index, 2);
        assert_eq!(loaded.gesture.click_distance_px, 30.0);
        assert_eq!(loaded.mapping.smoothing, 7.5);
    }

    #[test]
    fn test_config_save_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let nested_path = temp_dir.path().join("nested").join("path").join("config.toml");

        let config = Config::default();
        config.save(&nested_path).expect("Failed to save config");

        assert!(nested_path.exists());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let nonexistent_path = PathBuf::from("/tmp/nonexistent_gesture_mouse_config.toml");
        assert!(Config::load(&nonexistent_path).is_err());
    }

    #[test]
    fn test_validate_zero_frame_dimension() {
        let mut config = Config::default();
        config.capture.frame_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_multi_hand_rejected() {
        let mut config = Config::default();
        config.tracking.max_hands = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_confidence_out_of_range() {
        let mut config = Config::default();
        config.tracking.detection_confidence = 1.5;
        assert!(config.validate().is_err());
        config.tracking.detection_confidence = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_click_distance_not_positive() {
        let mut config = Config::default();
        config.gesture.click_distance_px = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_margin_swallows_frame() {
        let mut config = Config::default();
        config.mapping.frame_margin_px = 240.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_margin() {
        let mut config = Config::default();
        config.mapping.frame_margin_px = -5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_smoothing_too_small() {
        let mut config = Config::default();
        config.mapping.smoothing = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_boundary_values() {
        let mut config = Config::default();
        config.tracking.detection_confidence = 0.0;
        assert!(config.validate().is_ok());
        config.tracking.detection_confidence = 1.0;
        assert!(config.validate().is_ok());
        config.mapping.frame_margin_px = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("bad_config.toml");
        std::fs::write(
            &config_path,
            r#"
[capture]
camera_index = 0
frame_width = 640
frame_height = 480
mirror = true

[gesture]
click_distance_px = -4.0

[mapping]
frame_margin_px = 80.0
smoothing = 5.0
"#,
        )
        .expect("Failed to write config");
        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_partial_config_uses_section_defaults() {
        // A config file with only [capture] present fills the rest in
        let partial = r#"
[capture]
camera_index = 1
frame_width = 1280
frame_height = 720
mirror = false
"#;
        let config: Config = toml::from_str(partial).expect("partial config should parse");
        assert_eq!(config.capture.camera_index, 1);
        assert_eq!(config.tracking.max_hands, 1);
        assert_eq!(config.gesture.click_distance_px, 25.0);
        assert_eq!(config.mapping.smoothing, 5.0);
    }

    #[test]
    fn test_invalid_toml_parsing() {
        let invalid_toml = "this is not valid toml {{{}}}";
        let result: Result<Config, _> = toml::from_str(invalid_toml);
        assert!(result.is_err());
    }
}
