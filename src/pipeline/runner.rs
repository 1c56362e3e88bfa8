//! Frame loop orchestration
//!
//! Each iteration runs the full chain: acquire frame, detect landmarks,
//! classify the gesture, then either steer the cursor or evaluate the
//! pinch click. The loop owns the cross-frame cursor state and the stop
//! condition; everything else is recomputed from scratch per frame.

use crate::actuator::cursor::{CursorActuator, ScreenSize};
use crate::app::config::Config;
use crate::capture::camera::VideoSource;
use crate::capture::frame::Frame;
use crate::gesture::classifier::{classify, pinch_distance, Gesture};
use crate::gesture::fingers::FingerState;
use crate::mapping::region::ActiveRegion;
use crate::mapping::smoothing::CursorTracker;
use crate::pipeline::fps::FpsCounter;
use crate::tracking::detector::HandDetector;
use crate::tracking::landmarks::INDEX_TIP;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// What one frame produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// No hand in the frame; nothing to do
    NoHand,
    /// A hand without an actionable finger configuration
    Idle { fingers: FingerState },
    /// The cursor moved to the smoothed screen position
    Moved { cursor: (f64, f64) },
    /// Click posture held but the fingertips are not pinched
    ClickArmed { distance: f64 },
    /// A click fired at the given pinch distance
    Clicked { distance: f64 },
}

/// Counters for one run of the loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames acquired
    pub frames: u64,
    /// Frames with a detected hand
    pub hands: u64,
    /// Cursor movements issued
    pub moves: u64,
    /// Clicks issued
    pub clicks: u64,
    /// Frames skipped after a contained per-frame error
    pub skipped: u64,
}

/// The assembled gesture-to-cursor pipeline.
///
/// Owns the detector, the actuator, and the only cross-frame state: the
/// smoothed cursor position inside [`CursorTracker`].
pub struct Pipeline<D, A> {
    detector: D,
    actuator: A,
    region: ActiveRegion,
    screen: ScreenSize,
    tracker: CursorTracker,
    click_distance_px: f64,
    mirror: bool,
}

impl<D: HandDetector, A: CursorActuator> Pipeline<D, A> {
    /// Assemble a pipeline for frames of the given dimensions
    pub fn new(
        detector: D,
        actuator: A,
        config: &Config,
        frame_dims: (u32, u32),
    ) -> crate::Result<Self> {
        let screen = actuator.screen_size()?;
        let region = ActiveRegion::inset(frame_dims.0, frame_dims.1, config.mapping.frame_margin_px)?;
        let tracker = CursorTracker::new(config.mapping.smoothing)?;

        debug!(
            "Pipeline maps region ({}, {})..({}, {}) onto {}x{} screen",
            region.left, region.top, region.right, region.bottom, screen.width, screen.height
        );

        Ok(Self {
            detector,
            actuator,
            region,
            screen,
            tracker,
            click_distance_px: config.gesture.click_distance_px,
            mirror: config.capture.mirror,
        })
    }

    /// The screen the pipeline maps onto
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    /// Run one frame through detect, classify, and act.
    ///
    /// Errors returned here are recoverable per-frame conditions; [`run`]
    /// logs them and moves on to the next frame.
    ///
    /// [`run`]: Pipeline::run
    pub fn process_frame(&mut self, frame: &Frame) -> crate::Result<FrameOutcome> {
        let Some(hand) = self.detector.detect(frame)? else {
            return Ok(FrameOutcome::NoHand);
        };

        let result = classify(&hand.points)?;
        match result.gesture {
            Gesture::Move => {
                let tip = hand.points[INDEX_TIP];
                let target = self.region.remap(tip.x, tip.y, self.screen);
                let cursor = self.tracker.advance(target);
                self.move_cursor(cursor);
                Ok(FrameOutcome::Moved { cursor })
            }
            Gesture::Click => {
                let distance = pinch_distance(&hand.points)?;
                if distance < self.click_distance_px {
                    self.click();
                    Ok(FrameOutcome::Clicked { distance })
                } else {
                    Ok(FrameOutcome::ClickArmed { distance })
                }
            }
            Gesture::None => Ok(FrameOutcome::Idle {
                fingers: result.fingers,
            }),
        }
    }

    /// Best-effort cursor move: on failure, clamp into the addressable
    /// pixel grid and retry once.
    fn move_cursor(&mut self, (x, y): (f64, f64)) {
        if let Err(e) = self.actuator.move_to(x, y) {
            warn!("Cursor move rejected: {}", e);
            let (cx, cy) = self.screen.clamp(x, y);
            if let Err(e) = self.actuator.move_to(cx, cy) {
                warn!("Clamped cursor move failed, giving up this frame: {}", e);
            }
        }
    }

    /// Best-effort click with a single retry
    fn click(&mut self) {
        if let Err(e) = self.actuator.click() {
            warn!("Click rejected: {}", e);
            if let Err(e) = self.actuator.click() {
                warn!("Click retry failed, giving up this frame: {}", e);
            }
        }
    }

    /// Drive the blocking frame loop until the stop flag is set, the
    /// optional duration elapses, or the source ends.
    ///
    /// Frame acquisition failures are fatal and propagate; every other
    /// error is contained within its frame.
    pub fn run(
        &mut self,
        source: &mut dyn VideoSource,
        stop: &AtomicBool,
        duration: Option<Duration>,
    ) -> crate::Result<RunStats> {
        let started = Instant::now();
        let mut stats = RunStats::default();
        let mut fps = FpsCounter::new();

        loop {
            if stop.load(Ordering::SeqCst) {
                info!("Stop requested, ending frame loop");
                break;
            }
            if let Some(limit) = duration {
                if started.elapsed() >= limit {
                    info!("Duration limit reached, ending frame loop");
                    break;
                }
            }

            let frame = match source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    info!("Video source ended");
                    break;
                }
                Err(e) => {
                    warn!("Frame acquisition failed, shutting down: {}", e);
                    return Err(e);
                }
            };
            let frame = if self.mirror { frame.mirrored() } else { frame };

            stats.frames += 1;
            match self.process_frame(&frame) {
                Ok(outcome) => {
                    trace!(?outcome, frame = stats.frames);
                    match outcome {
                        FrameOutcome::NoHand => {}
                        FrameOutcome::Idle { .. } => stats.hands += 1,
                        FrameOutcome::Moved { .. } => {
                            stats.hands += 1;
                            stats.moves += 1;
                        }
                        FrameOutcome::ClickArmed { .. } => stats.hands += 1,
                        FrameOutcome::Clicked { .. } => {
                            stats.hands += 1;
                            stats.clicks += 1;
                        }
                    }
                }
                Err(e) => {
                    warn!("Skipping frame {}: {}", stats.frames, e);
                    stats.skipped += 1;
                }
            }

            if let Some(rate) = fps.tick() {
                debug!("fps: {:.1}", rate);
            }
        }

        Ok(stats)
    }
}
