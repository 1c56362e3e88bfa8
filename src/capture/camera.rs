//! Webcam capture
//!
//! [`VideoSource`] is the blocking frame seam: one call per loop iteration,
//! `Ok(None)` signals end of stream, and an `Err` is fatal for the loop.
//! The only production implementation wraps a `nokhwa` camera; tests drive
//! the pipeline with scripted sources instead.

use crate::capture::frame::Frame;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
};
use nokhwa::Camera;
use tracing::{debug, info};

/// Requested capture rate; the device may negotiate a different one
const REQUESTED_FPS: u32 = 30;

/// A blocking source of video frames
pub trait VideoSource {
    /// Acquire the next frame, blocking until one is ready.
    ///
    /// Returns `Ok(None)` at end of stream. Errors are
    /// [`crate::Error::FrameAcquisition`] and terminate the loop.
    fn next_frame(&mut self) -> crate::Result<Option<Frame>>;

    /// Frame dimensions, fixed for the lifetime of the source
    fn dimensions(&self) -> (u32, u32);
}

/// Webcam frame source backed by `nokhwa`
pub struct Webcam {
    camera: Camera,
    width: u32,
    height: u32,
}

impl Webcam {
    /// Open camera `index`, requesting the closest format to
    /// `width` x `height` MJPEG.
    pub fn open(index: u32, width: u32, height: u32) -> crate::Result<Self> {
        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
            CameraFormat::new(Resolution::new(width, height), FrameFormat::MJPEG, REQUESTED_FPS),
        ));
        let mut camera = Camera::new(CameraIndex::Index(index), requested)
            .map_err(|e| crate::Error::Camera(format!("failed to open camera {index}: {e}")))?;

        camera
            .open_stream()
            .map_err(|e| crate::Error::Camera(format!("failed to start stream: {e}")))?;

        // The device may not honor the requested resolution exactly
        let resolution = camera.resolution();
        let (width, height) = (resolution.width(), resolution.height());
        info!("Camera {} streaming at {}x{}", index, width, height);

        Ok(Self {
            camera,
            width,
            height,
        })
    }
}

impl VideoSource for Webcam {
    fn next_frame(&mut self) -> crate::Result<Option<Frame>> {
        let buffer = self
            .camera
            .frame()
            .map_err(|e| crate::Error::FrameAcquisition(e.to_string()))?;
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| crate::Error::FrameAcquisition(format!("decode failed: {e}")))?;

        let (width, height) = (decoded.width(), decoded.height());
        let frame = Frame::new(width, height, decoded.into_raw())?;
        Ok(Some(frame))
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Drop for Webcam {
    fn drop(&mut self) {
        if let Err(e) = self.camera.stop_stream() {
            debug!("Failed to stop camera stream: {}", e);
        }
    }
}
