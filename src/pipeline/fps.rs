//! Frame-rate measurement

use std::time::Instant;

/// Instantaneous frames-per-second over consecutive loop iterations
#[derive(Debug, Default)]
pub struct FpsCounter {
    last: Option<Instant>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an iteration; returns the rate since the previous one.
    ///
    /// The first tick has no interval and returns `None`.
    pub fn tick(&mut self) -> Option<f64> {
        let now = Instant::now();
        let fps = self.last.and_then(|prev| {
            let elapsed = now.duration_since(prev).as_secs_f64();
            (elapsed > 0.0).then(|| 1.0 / elapsed)
        });
        self.last = Some(now);
        fps
    }
}
