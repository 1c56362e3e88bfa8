//! Cursor motion smoothing
//!
//! A single-pole low-pass filter: each frame the cursor covers
//! `1/smoothing` of the remaining distance to the target. Larger factors
//! trade responsiveness for steadier motion. Both axes advance from the
//! same previous-position snapshot, each against its own component.

/// The smoothed cursor position carried across frames.
///
/// This is the only cross-frame state in the pipeline. It is owned by the
/// runner and threaded explicitly through each frame; position starts at
/// the (0, 0) sentinel and is reset only at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorTracker {
    smoothing: f64,
    prev: (f64, f64),
}

impl CursorTracker {
    /// Create a tracker with the given smoothing divisor (must be > 1)
    pub fn new(smoothing: f64) -> crate::Result<Self> {
        if !(smoothing > 1.0) {
            return Err(crate::Error::Config(format!(
                "smoothing factor must be greater than 1, got {smoothing}"
            )));
        }
        Ok(Self {
            smoothing,
            prev: (0.0, 0.0),
        })
    }

    /// Advance toward `target` and return the new smoothed position.
    ///
    /// The returned position becomes the previous value for the next frame.
    pub fn advance(&mut self, target: (f64, f64)) -> (f64, f64) {
        let (px, py) = self.prev;
        let next = (
            px + (target.0 - px) / self.smoothing,
            py + (target.1 - py) / self.smoothing,
        );
        self.prev = next;
        next
    }

    /// The last emitted position
    pub fn position(&self) -> (f64, f64) {
        self.prev
    }

    /// Return to the startup sentinel
    pub fn reset(&mut self) {
        self.prev = (0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_factor_at_or_below_one() {
        assert!(CursorTracker::new(1.0).is_err());
        assert!(CursorTracker::new(0.5).is_err());
        assert!(CursorTracker::new(f64::NAN).is_err());
        assert!(CursorTracker::new(5.0).is_ok());
    }

    #[test]
    fn test_starts_at_origin_sentinel() {
        let tracker = CursorTracker::new(5.0).unwrap();
        assert_eq!(tracker.position(), (0.0, 0.0));
    }

    #[test]
    fn test_single_step() {
        let mut tracker = CursorTracker::new(5.0).unwrap();
        tracker.prev = (500.0, 500.0);
        let next = tracker.advance((600.0, 500.0));
        assert_eq!(next, (520.0, 500.0));
        assert_eq!(tracker.position(), (520.0, 500.0));
    }

    #[test]
    fn test_axes_advance_independently() {
        let mut tracker = CursorTracker::new(2.0).unwrap();
        tracker.prev = (100.0, 400.0);
        let next = tracker.advance((200.0, 200.0));
        // Each axis halves its own remaining distance
        assert_eq!(next, (150.0, 300.0));
    }

    #[test]
    fn test_converges_to_constant_target() {
        let mut tracker = CursorTracker::new(5.0).unwrap();
        let target = (960.0, 540.0);
        for _ in 0..100 {
            tracker.advance(target);
        }
        let (x, y) = tracker.position();
        assert!((x - target.0).abs() < 1e-6);
        assert!((y - target.1).abs() < 1e-6);
    }

    #[test]
    fn test_convergence_is_monotone() {
        let mut tracker = CursorTracker::new(3.0).unwrap();
        let target = (300.0, 700.0);
        let mut last_distance = f64::INFINITY;
        for _ in 0..20 {
            let (x, y) = tracker.advance(target);
            let distance = (target.0 - x).hypot(target.1 - y);
            assert!(distance < last_distance);
            last_distance = distance;
        }
    }

    #[test]
    fn test_reset_returns_to_sentinel() {
        let mut tracker = CursorTracker::new(5.0).unwrap();
        tracker.advance((100.0, 100.0));
        tracker.reset();
        assert_eq!(tracker.position(), (0.0, 0.0));
    }
}
