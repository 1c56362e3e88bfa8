//! # gesture-mouse
//!
//! A webcam-driven virtual mouse. A hand detector produces 21 landmarks per
//! frame, a gesture classifier derives which fingers are raised, and the
//! index fingertip steers the system cursor. Pinching index and middle
//! fingertips together triggers a left click.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gesture_mouse::app::config::Config;
//! use gesture_mouse::actuator::system::DryRunCursor;
//! use gesture_mouse::actuator::cursor::ScreenSize;
//! use gesture_mouse::pipeline::runner::Pipeline;
//! use gesture_mouse::tracking::mediapipe::MediaPipeDetector;
//!
//! let config = Config::default();
//! let detector = MediaPipeDetector::spawn(&config.tracking).expect("detector");
//! let actuator = DryRunCursor::new(ScreenSize::new(1920, 1080));
//!
//! let mut pipeline = Pipeline::new(detector, actuator, &config, (640, 480))
//!     .expect("pipeline");
//! // feed frames from a `VideoSource` via `pipeline.run(..)`
//! ```
//!
//! ## Architecture
//!
//! - [`capture`]: video frame acquisition behind the [`capture::camera::VideoSource`] trait
//! - [`tracking`]: hand landmark detection behind the [`tracking::detector::HandDetector`] trait
//! - [`gesture`]: per-frame finger state and move/click classification
//! - [`mapping`]: camera-region to screen remapping and cursor smoothing
//! - [`actuator`]: cursor injection behind the [`actuator::cursor::CursorActuator`] trait
//! - [`pipeline`]: the blocking per-frame control loop
//! - [`app`]: CLI and configuration management
//!
//! ## Frame Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Webcam    │───▶│    Hand     │───▶│   Gesture   │───▶│  Coordinate │
//! │  (capture)  │    │  Detector   │    │ Classifier  │    │   Mapper    │
//! └─────────────┘    └─────────────┘    └─────────────┘    └──────┬──────┘
//!                                              │                  │
//!                                        pinch distance           ▼
//!                                              │           ┌─────────────┐
//!                                              └──────────▶│   Cursor    │
//!                                                          │  Actuator   │
//!                                                          └─────────────┘
//! ```
//!
//! Hand detection itself is delegated to an external model process; this
//! crate only orchestrates the frame loop around it.

pub mod capture;
pub mod tracking;
pub mod gesture;
pub mod mapping;
pub mod actuator;
pub mod pipeline;
pub mod app;

// Re-export commonly used types
pub use capture::frame::Frame;
pub use gesture::classifier::{classify, Gesture, GestureResult};
pub use gesture::fingers::FingerState;
pub use mapping::region::ActiveRegion;
pub use mapping::smoothing::CursorTracker;
pub use pipeline::runner::{FrameOutcome, Pipeline, RunStats};
pub use tracking::landmarks::{HandLandmarks, Landmark};

/// Result type alias for the gesture mouse
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the gesture mouse
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Camera error: {0}")]
    Camera(String),

    #[error("Frame acquisition failed: {0}")]
    FrameAcquisition(String),

    #[error("Hand detector error: {0}")]
    Detector(String),

    #[error("Landmark set too small: expected {expected}, got {got}")]
    InsufficientLandmarks { expected: usize, got: usize },

    #[error("Cursor actuator error: {0}")]
    Actuator(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
