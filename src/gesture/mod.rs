//! Per-frame gesture classification
//!
//! Derives which fingers are raised from landmark geometry and maps the
//! finger configuration to a move or click gesture. Everything here is a
//! pure function over one frame's landmarks; no state survives a frame.

pub mod fingers;
pub mod classifier;

pub use classifier::{classify, pinch_distance, Gesture, GestureResult};
pub use fingers::{finger_states, FingerState};
