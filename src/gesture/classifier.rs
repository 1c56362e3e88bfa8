//! Move/click gesture decision
//!
//! One classification per frame: index up with middle down steers the
//! cursor, index and middle both up arms a click. The click itself only
//! fires once the two fingertips pinch below the configured distance,
//! which the pipeline checks via [`pinch_distance`].

use crate::gesture::fingers::{finger_states, FingerState};
use crate::tracking::landmarks::{Landmark, INDEX_TIP, LANDMARK_COUNT, MIDDLE_TIP};

/// The active gesture for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    /// No action this frame
    #[default]
    None,
    /// Index up, middle down: steer the cursor
    Move,
    /// Index and middle up: click when the tips pinch together
    Click,
}

/// Classification output for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureResult {
    pub fingers: FingerState,
    pub gesture: Gesture,
}

/// Classify one frame's landmarks.
///
/// An empty slice is the no-hand case and yields `Gesture::None` with an
/// all-false finger state. A non-empty slice shorter than the 21-point
/// topology is malformed detector output and fails with
/// [`crate::Error::InsufficientLandmarks`].
///
/// Pure function: identical input always yields identical output.
pub fn classify(points: &[Landmark]) -> crate::Result<GestureResult> {
    if points.is_empty() {
        return Ok(GestureResult::default());
    }

    let fingers = finger_states(points)?;
    let gesture = match (fingers.index, fingers.middle) {
        (true, false) => Gesture::Move,
        (true, true) => Gesture::Click,
        _ => Gesture::None,
    };

    Ok(GestureResult { fingers, gesture })
}

/// Distance between the index and middle fingertips in frame pixels
pub fn pinch_distance(points: &[Landmark]) -> crate::Result<f64> {
    if points.len() < LANDMARK_COUNT {
        return Err(crate::Error::InsufficientLandmarks {
            expected: LANDMARK_COUNT,
            got: points.len(),
        });
    }
    Ok(points[INDEX_TIP].distance_to(points[MIDDLE_TIP]))
}
