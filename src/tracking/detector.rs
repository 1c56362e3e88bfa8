//! The hand detection seam

use crate::capture::frame::Frame;
use crate::tracking::landmarks::HandLandmarks;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Detector settings handed to the external model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Maximum hands to track; this pipeline supports exactly one
    pub max_hands: usize,
    /// Minimum detection confidence (0.0 to 1.0)
    pub detection_confidence: f32,
    /// Path to the detection helper script
    pub script_path: PathBuf,
    /// Python interpreter used to run the helper
    pub python_path: PathBuf,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_hands: 1,
            detection_confidence: 0.7,
            script_path: PathBuf::from("helpers/hand_landmarker.py"),
            python_path: PathBuf::from(".venv/bin/python"),
        }
    }
}

/// A per-frame hand landmark detector.
///
/// `Ok(None)` means no hand was found, which is a valid result and not an
/// error; the caller skips gesture classification for that frame.
pub trait HandDetector {
    /// Detect hand landmarks in the frame.
    ///
    /// Returned positions are frame-pixel coordinates.
    fn detect(&mut self, frame: &Frame) -> crate::Result<Option<HandLandmarks>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectorConfig::default();
        assert_eq!(config.max_hands, 1);
        assert_eq!(config.detection_confidence, 0.7);
        assert!(config.script_path.to_string_lossy().ends_with(".py"));
    }
}
