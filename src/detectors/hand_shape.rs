//! Whole-hand shape heuristic: overall openness of the hand.

use super::Detection;
use crate::geometry::distance;
use crate::tracking::{Landmark, FINGER_TIPS, LANDMARK_COUNT, PALM_CENTER, WRIST};

const S_CONFIDENCE: f64 = 0.8;
const HELLO_CONFIDENCE: f64 = 0.7;

const CLOSED_OPENNESS: f64 = 0.15;
const OPEN_OPENNESS: f64 = 0.25;

pub fn detect(landmarks: &[Landmark]) -> Option<Detection> {
    if landmarks.len() != LANDMARK_COUNT {
        return None;
    }

    let wrist = &landmarks[WRIST];

    // Mean fingertip distance from the wrist: a proxy for how open the
    // hand is, independent of which fingers are doing what.
    let openness = FINGER_TIPS
        .iter()
        .map(|&tip| distance(&landmarks[tip], wrist))
        .sum::<f64>()
        / FINGER_TIPS.len() as f64;

    if openness < CLOSED_OPENNESS {
        // Tight fist with the thumb wrapped across reads as "S".
        let thumb_tip = &landmarks[4];
        let palm_center = &landmarks[PALM_CENTER];
        if thumb_tip.x > palm_center.x {
            return Some(Detection::new("S", S_CONFIDENCE));
        }
    }

    if openness > OPEN_OPENNESS {
        return Some(Detection::new("Hello", HELLO_CONFIDENCE));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{fist, hand_with_extensions, open_palm};
    use super::*;

    #[test]
    fn wide_open_hand_reads_as_hello() {
        let result = detect(&open_palm()).unwrap();
        assert_eq!(result.symbol, "Hello");
        assert_eq!(result.confidence, 0.7);
    }

    #[test]
    fn tight_fist_with_wrapped_thumb_reads_as_s() {
        let mut lms = fist();
        // Pull every fingertip close to the wrist and wrap the thumb
        // across the palm, past the palm center.
        for &tip in &FINGER_TIPS {
            lms[tip] = Landmark::new(0.52, 0.62, 0.0);
        }
        lms[4] = Landmark::new(0.56, 0.64, 0.0);
        let result = detect(&lms).unwrap();
        assert_eq!(result.symbol, "S");
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn tight_fist_without_wrapped_thumb_has_no_opinion() {
        let mut lms = fist();
        for &tip in &FINGER_TIPS {
            lms[tip] = Landmark::new(0.48, 0.62, 0.0);
        }
        assert!(detect(&lms).is_none());
    }

    #[test]
    fn middling_openness_has_no_opinion() {
        assert!(detect(&hand_with_extensions([false, true, false, true, false])).is_none());
    }
}
