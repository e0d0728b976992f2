//! Joint-angle heuristic: reads finger curvature for the curved letters.

use super::Detection;
use crate::geometry::angle;
use crate::tracking::{Landmark, LANDMARK_COUNT};

const C_CONFIDENCE: f64 = 0.75;
const O_CONFIDENCE: f64 = 0.8;

pub fn detect(landmarks: &[Landmark]) -> Option<Detection> {
    if landmarks.len() != LANDMARK_COUNT {
        return None;
    }

    let thumb_angle = angle(&landmarks[2], &landmarks[3], &landmarks[4]);
    let index_angle = angle(&landmarks[6], &landmarks[7], &landmarks[8]);

    // Curved thumb and index read as "C". This check runs before the "O"
    // check and returns immediately, so a pose satisfying both is reported
    // as "C" (kept as-is for compatibility; NaN angles fail both ranges).
    if thumb_angle > 45.0 && thumb_angle < 90.0 && index_angle > 45.0 && index_angle < 90.0 {
        return Some(Detection::new("C", C_CONFIDENCE));
    }

    // All four non-thumb fingers curved into a ring reads as "O".
    let all_curved = [8usize, 12, 16, 20].iter().all(|&tip| {
        let a = angle(&landmarks[tip - 2], &landmarks[tip - 1], &landmarks[tip]);
        a > 30.0 && a < 120.0
    });

    if all_curved {
        return Some(Detection::new("O", O_CONFIDENCE));
    }

    None
}
