use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::landmarks::{Landmark, LANDMARK_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("expected 21 landmarks, got {0}")]
    InvalidLandmarkCount(usize),
    #[error("tracking score {0} outside [0, 1]")]
    InvalidScore(f64),
}

/// One tracked hand for one video frame, as delivered by the external
/// hand tracker. Validated on construction; the recognizer itself stays
/// lenient and simply returns no result for malformed slices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandFrame {
    pub handedness: Handedness,
    pub landmarks: Vec<Landmark>,
    /// Tracker-reported confidence that this is a hand at all.
    pub score: f64,
}

impl HandFrame {
    pub fn new(
        handedness: Handedness,
        landmarks: Vec<Landmark>,
        score: f64,
    ) -> Result<Self, FrameError> {
        if landmarks.len() != LANDMARK_COUNT {
            return Err(FrameError::InvalidLandmarkCount(landmarks.len()));
        }
        if !(0.0..=1.0).contains(&score) {
            return Err(FrameError::InvalidScore(score));
        }
        Ok(Self {
            handedness,
            landmarks,
            score,
        })
    }
}
