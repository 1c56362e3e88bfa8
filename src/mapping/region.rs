//! The active frame region
//!
//! A fixed inset rectangle within the camera frame is mapped linearly onto
//! the full screen. The inset keeps the fingertip reachable over the whole
//! display without leaving the camera's field of view. Points tracked
//! outside the rectangle clamp to the nearest screen edge.

use crate::actuator::cursor::ScreenSize;

/// The inset camera rectangle mapped onto the full screen.
///
/// Constant for the lifetime of the process; built once from the frame
/// dimensions and the configured margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveRegion {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ActiveRegion {
    /// Inset `margin` pixels from every edge of a frame
    pub fn inset(frame_width: u32, frame_height: u32, margin: f64) -> crate::Result<Self> {
        let (w, h) = (f64::from(frame_width), f64::from(frame_height));
        if margin < 0.0 || 2.0 * margin >= w.min(h) {
            return Err(crate::Error::Config(format!(
                "frame margin {margin} does not leave an active region in a {frame_width}x{frame_height} frame"
            )));
        }
        Ok(Self {
            left: margin,
            top: margin,
            right: w - margin,
            bottom: h - margin,
        })
    }

    /// Region width in frame pixels
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Region height in frame pixels
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether a frame point falls inside the region
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Project a frame point onto screen coordinates.
    ///
    /// Linear on each axis, clamped to `[0, width] x [0, height]` when the
    /// input falls outside the region.
    pub fn remap(&self, x: f64, y: f64, screen: ScreenSize) -> (f64, f64) {
        let sx = (x - self.left) / self.width() * f64::from(screen.width);
        let sy = (y - self.top) / self.height() * f64::from(screen.height);
        (
            sx.clamp(0.0, f64::from(screen.width)),
            sy.clamp(0.0, f64::from(screen.height)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenSize = ScreenSize {
        width: 1920,
        height: 1080,
    };

    #[test]
    fn test_inset() {
        let region = ActiveRegion::inset(640, 480, 80.0).unwrap();
        assert_eq!(region.left, 80.0);
        assert_eq!(region.top, 80.0);
        assert_eq!(region.right, 560.0);
        assert_eq!(region.bottom, 400.0);
        assert_eq!(region.width(), 480.0);
        assert_eq!(region.height(), 320.0);
    }

    #[test]
    fn test_inset_rejects_degenerate_margin() {
        assert!(ActiveRegion::inset(640, 480, 240.0).is_err());
        assert!(ActiveRegion::inset(640, 480, -1.0).is_err());
    }

    #[test]
    fn test_zero_margin_covers_frame() {
        let region = ActiveRegion::inset(640, 480, 0.0).unwrap();
        assert_eq!(region.width(), 640.0);
        assert_eq!(region.height(), 480.0);
    }

    #[test]
    fn test_remap_frame_center_to_screen_center() {
        let region = ActiveRegion::inset(640, 480, 80.0).unwrap();
        let (x, y) = region.remap(320.0, 240.0, SCREEN);
        assert!((x - 960.0).abs() < 1e-9);
        assert!((y - 540.0).abs() < 1e-9);
    }

    #[test]
    fn test_remap_corners() {
        let region = ActiveRegion::inset(640, 480, 80.0).unwrap();
        assert_eq!(region.remap(80.0, 80.0, SCREEN), (0.0, 0.0));
        assert_eq!(region.remap(560.0, 400.0, SCREEN), (1920.0, 1080.0));
    }

    #[test]
    fn test_remap_clamps_outside_region() {
        let region = ActiveRegion::inset(640, 480, 80.0).unwrap();
        assert_eq!(region.remap(0.0, 0.0, SCREEN), (0.0, 0.0));
        assert_eq!(region.remap(640.0, 480.0, SCREEN), (1920.0, 1080.0));
        assert_eq!(region.remap(-50.0, 1000.0, SCREEN), (0.0, 1080.0));
    }

    #[test]
    fn test_remap_output_stays_on_screen() {
        let region = ActiveRegion::inset(640, 480, 80.0).unwrap();
        for x in (-100..800).step_by(37) {
            for y in (-100..600).step_by(41) {
                let (sx, sy) = region.remap(f64::from(x), f64::from(y), SCREEN);
                assert!((0.0..=1920.0).contains(&sx));
                assert!((0.0..=1080.0).contains(&sy));
            }
        }
    }

    #[test]
    fn test_contains() {
        let region = ActiveRegion::inset(640, 480, 80.0).unwrap();
        assert!(region.contains(320.0, 240.0));
        assert!(region.contains(80.0, 80.0));
        assert!(!region.contains(79.9, 240.0));
        assert!(!region.contains(320.0, 401.0));
    }
}
