//! MediaPipe hand landmarker backend
//!
//! Runs the pre-trained MediaPipe hand landmarker in a Python helper
//! process. Frames go out as a small binary header (width, height,
//! channels as little-endian u32) followed by raw RGB bytes; results come
//! back as one JSON object per line. The helper prints `READY` once the
//! model is loaded.
//!
//! # Model Setup
//!
//! Download the MediaPipe hand landmarker model:
//! wget https://storage.googleapis.com/mediapipe-models/hand_landmarker/hand_landmarker/float16/latest/hand_landmarker.task
//! and point `tracking.script_path` / `tracking.python_path` at the helper
//! script and interpreter.

use crate::capture::frame::{Frame, FRAME_CHANNELS};
use crate::tracking::detector::{DetectorConfig, HandDetector};
use crate::tracking::landmarks::{HandLandmarks, Landmark, LANDMARK_COUNT};
use serde::Deserialize;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdout, Command, Stdio};
use tracing::{debug, info, warn};

/// One landmark as emitted by the helper, normalized to the frame
#[derive(Debug, Deserialize)]
struct LandmarkJson {
    x: f32,
    y: f32,
    #[allow(dead_code)]
    #[serde(default)]
    z: f32,
}

#[derive(Debug, Deserialize)]
struct HandJson {
    handedness: String,
    score: f32,
    landmarks: Vec<LandmarkJson>,
}

#[derive(Debug, Deserialize)]
struct DetectionJson {
    #[serde(default)]
    hands: Vec<HandJson>,
    #[serde(default)]
    error: Option<String>,
}

/// Hand detector backed by a MediaPipe helper process
pub struct MediaPipeDetector {
    process: Child,
    stdout_reader: BufReader<ChildStdout>,
    config: DetectorConfig,
}

impl MediaPipeDetector {
    /// Start the helper process and wait for its READY handshake
    pub fn spawn(config: &DetectorConfig) -> crate::Result<Self> {
        if !config.script_path.exists() {
            return Err(crate::Error::Detector(format!(
                "helper script not found at {:?}",
                config.script_path
            )));
        }
        if !config.python_path.exists() {
            return Err(crate::Error::Detector(format!(
                "python interpreter not found at {:?}; run: python3 -m venv .venv && \
                 .venv/bin/pip install mediapipe numpy",
                config.python_path
            )));
        }

        info!("Starting MediaPipe hand landmarker helper");

        let mut process = Command::new(&config.python_path)
            .arg(&config.script_path)
            .arg("--max-hands")
            .arg(config.max_hands.to_string())
            .arg("--confidence")
            .arg(config.detection_confidence.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| crate::Error::Detector(format!("failed to start helper: {e}")))?;

        let stdout = process
            .stdout
            .take()
            .ok_or_else(|| crate::Error::Detector("helper stdout unavailable".to_string()))?;
        let mut stdout_reader = BufReader::new(stdout);

        let mut ready_line = String::new();
        stdout_reader.read_line(&mut ready_line)?;
        if ready_line.trim() != "READY" {
            let _ = process.kill();
            return Err(crate::Error::Detector(format!(
                "helper did not signal ready, got: {ready_line:?}"
            )));
        }

        info!("MediaPipe hand landmarker ready");

        Ok(Self {
            process,
            stdout_reader,
            config: config.clone(),
        })
    }

    /// Whether the configured helper script and interpreter are present
    pub fn available(config: &DetectorConfig) -> bool {
        config.script_path.exists() && config.python_path.exists()
    }
}

impl HandDetector for MediaPipeDetector {
    fn detect(&mut self, frame: &Frame) -> crate::Result<Option<HandLandmarks>> {
        let stdin = self
            .process
            .stdin
            .as_mut()
            .ok_or_else(|| crate::Error::Detector("helper stdin unavailable".to_string()))?;

        stdin.write_all(&frame.width().to_le_bytes())?;
        stdin.write_all(&frame.height().to_le_bytes())?;
        stdin.write_all(&(FRAME_CHANNELS as u32).to_le_bytes())?;
        stdin.write_all(frame.data())?;
        stdin.flush()?;

        let mut response = String::new();
        self.stdout_reader.read_line(&mut response)?;
        if response.is_empty() {
            return Err(crate::Error::Detector(
                "helper closed its output stream".to_string(),
            ));
        }

        parse_detection(
            &response,
            self.config.detection_confidence,
            frame.width(),
            frame.height(),
        )
    }
}

impl Drop for MediaPipeDetector {
    fn drop(&mut self) {
        let _ = self.process.kill();
    }
}

/// Parse one helper response line into frame-pixel landmarks.
///
/// The first hand at or above the confidence threshold wins; hands with a
/// malformed landmark count are skipped with a warning.
fn parse_detection(
    line: &str,
    confidence_threshold: f32,
    frame_width: u32,
    frame_height: u32,
) -> crate::Result<Option<HandLandmarks>> {
    let result: DetectionJson = serde_json::from_str(line)?;

    if let Some(error) = result.error {
        warn!("Hand landmarker helper error: {}", error);
        return Ok(None);
    }

    for hand in result.hands {
        if hand.score < confidence_threshold {
            continue;
        }
        if hand.landmarks.len() != LANDMARK_COUNT {
            warn!(
                "Expected {} landmarks, got {}",
                LANDMARK_COUNT,
                hand.landmarks.len()
            );
            continue;
        }

        let points = hand
            .landmarks
            .iter()
            .map(|lm| {
                Landmark::new(
                    f64::from(lm.x) * f64::from(frame_width),
                    f64::from(lm.y) * f64::from(frame_height),
                )
            })
            .collect();

        debug!(
            "Hand detected: {} (confidence={:.2})",
            hand.handedness, hand.score
        );

        return Ok(Some(HandLandmarks {
            points,
            confidence: hand.score,
            handedness: hand.handedness,
        }));
    }

    Ok(None)
}
