//! Video frame acquisition
//!
//! Frames come from a blocking [`camera::VideoSource`]; the webcam backend
//! decodes to plain RGB8 buffers so the rest of the pipeline never touches
//! device-specific image types.

pub mod frame;
pub mod camera;

pub use frame::Frame;
pub use camera::{VideoSource, Webcam};
