//! Per-frame classification entry point.

use std::rc::Rc;

use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::temporal::TemporalFilter;
use super::voting;
use crate::detectors;
use crate::tracking::{Landmark, LANDMARK_COUNT};

/// A confirmed classification for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedGesture {
    pub symbol: String,
    pub confidence: f64,
}

/// Runs the full per-frame pipeline: heuristic detectors, weighted
/// voting, temporal confirmation. One instance per tracked session;
/// dropping it discards the temporal history (there is no other reset).
pub struct GestureRecognizer {
    filter: TemporalFilter,
    clock: Rc<dyn Clock>,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::with_clock(Rc::new(SystemClock))
    }

    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        Self {
            filter: TemporalFilter::new(),
            clock,
        }
    }

    /// Classifies one hand's landmarks. Returns a confirmed gesture, or
    /// `None` for malformed input, no consensus, or a not-yet-consistent
    /// detection. Never fails harder than `None`.
    pub fn recognize(&mut self, landmarks: &[Landmark]) -> Option<RecognizedGesture> {
        if landmarks.len() != LANDMARK_COUNT {
            return None;
        }

        let candidates = detectors::run_all(landmarks);
        let (symbol, score) = voting::vote(&candidates)?;
        debug!(symbol = %symbol, score, votes = candidates.len(), "ensemble winner");

        self.filter
            .confirm(&symbol, score, self.clock.as_ref())
            .map(|(symbol, confidence)| RecognizedGesture { symbol, confidence })
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
