//! Owned video frames
//!
//! A [`Frame`] is a row-major RGB8 buffer. The webcam image is mirrored
//! around the vertical axis before detection so that moving a hand to the
//! right moves the cursor to the right.

/// Bytes per pixel in a decoded frame
pub const FRAME_CHANNELS: usize = 3;

/// A decoded video frame (RGB8, row-major)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Create a frame from a decoded buffer.
    ///
    /// The buffer length must be exactly `width * height * 3`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> crate::Result<Self> {
        let expected = width as usize * height as usize * FRAME_CHANNELS;
        if data.len() != expected {
            return Err(crate::Error::Camera(format!(
                "frame buffer length mismatch: expected {} bytes for {}x{}, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width and height as a pair
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGB8 bytes, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// A copy of this frame flipped around the vertical axis
    pub fn mirrored(&self) -> Frame {
        let row_pixels = self.width as usize;
        let mut out = Vec::with_capacity(self.data.len());
        for row in self.data.chunks_exact(row_pixels * FRAME_CHANNELS) {
            for px in (0..row_pixels).rev() {
                let at = px * FRAME_CHANNELS;
                out.extend_from_slice(&row[at..at + FRAME_CHANNELS]);
            }
        }
        Frame {
            width: self.width,
            height: self.height,
            data: out,
        }
    }
}
