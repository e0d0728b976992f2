//! Finger-extension heuristic: classifies by which fingers are up.

use super::Detection;
use crate::tracking::{Landmark, FINGER_MCPS, FINGER_TIPS, LANDMARK_COUNT};

const PATTERN_CONFIDENCE: f64 = 0.85;

/// Named extension patterns, thumb..pinky. First entry to match wins;
/// the match must be exact in all five positions.
const PATTERNS: &[(&str, [bool; 5])] = &[
    ("A", [false, false, false, false, false]), // Closed fist
    ("B", [false, true, true, true, true]),     // Open palm, thumb folded
    ("D", [false, true, false, false, false]),  // Index finger up
    ("F", [true, true, false, false, false]),   // Thumb and index touching
    ("I", [false, false, false, false, true]),  // Pinky up
    ("L", [true, true, false, false, false]),   // Thumb and index forming L
    ("V", [false, true, true, false, false]),   // Peace sign
    ("W", [false, true, true, true, false]),    // Three fingers up
    ("Y", [true, false, false, false, true]),   // Thumb and pinky out
];

pub fn detect(landmarks: &[Landmark]) -> Option<Detection> {
    if landmarks.len() != LANDMARK_COUNT {
        return None;
    }

    // A finger is extended when its tip sits above its base joint
    // (smaller y in image coordinates).
    let mut extended = [false; 5];
    for (i, (&tip, &mcp)) in FINGER_TIPS.iter().zip(FINGER_MCPS.iter()).enumerate() {
        extended[i] = landmarks[tip].y < landmarks[mcp].y;
    }

    for (symbol, pattern) in PATTERNS {
        if extended == *pattern {
            return Some(Detection::new(*symbol, PATTERN_CONFIDENCE));
        }
    }

    None
}
