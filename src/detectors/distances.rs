//! Key-point distance heuristic: thumb-to-index pinch shapes.

use super::Detection;
use crate::geometry::distance;
use crate::tracking::{Landmark, LANDMARK_COUNT, WRIST};

const F_CONFIDENCE: f64 = 0.9;
const OK_CONFIDENCE: f64 = 0.85;

pub fn detect(landmarks: &[Landmark]) -> Option<Detection> {
    if landmarks.len() != LANDMARK_COUNT {
        return None;
    }

    let thumb_tip = &landmarks[4];
    let index_tip = &landmarks[8];
    let pinch = distance(thumb_tip, index_tip);

    // Thumb and index touching reads as "F". Checked first, so the OK
    // band below is effectively (0.05, 0.08).
    if pinch < 0.05 {
        return Some(Detection::new("F", F_CONFIDENCE));
    }

    // Thumb and index forming a ring, remaining fingers raised.
    if pinch < 0.08 && pinch > 0.02 {
        let wrist = &landmarks[WRIST];
        let raised = [12usize, 16, 20]
            .iter()
            .all(|&tip| landmarks[tip].y < wrist.y);
        if raised {
            return Some(Detection::new("OK", OK_CONFIDENCE));
        }
    }

    None
}
