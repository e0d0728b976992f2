//! Four independent geometric heuristics. Each maps one hand's 21
//! landmarks to an optional symbol guess; all of them always run and the
//! ensemble voter reconciles their answers.

pub mod angles;
pub mod distances;
pub mod finger_patterns;
pub mod hand_shape;

use crate::tracking::Landmark;

/// One detector's guess for one frame. Discarded right after voting.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub symbol: String,
    pub confidence: f64,
}

impl Detection {
    pub fn new(symbol: impl Into<String>, confidence: f64) -> Self {
        Self {
            symbol: symbol.into(),
            confidence,
        }
    }
}

/// Runs every heuristic and collects the non-empty guesses.
pub fn run_all(landmarks: &[Landmark]) -> Vec<Detection> {
    [
        finger_patterns::detect(landmarks),
        angles::detect(landmarks),
        distances::detect(landmarks),
        hand_shape::detect(landmarks),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::tracking::Landmark;

    /// X positions of the thumb..pinky joint chains.
    const FINGER_X: [f64; 5] = [0.30, 0.42, 0.50, 0.58, 0.66];

    /// Builds a synthetic hand where each finger is either extended
    /// (tip above its MCP) or folded (tip below). Joint chains are kept
    /// collinear so the angle heuristic stays silent, and the geometry is
    /// sized so the shape heuristic stays silent too.
    pub fn hand_with_extensions(extended: [bool; 5]) -> Vec<Landmark> {
        let mut lms = vec![Landmark::new(0.5, 0.5, 0.0); 21];
        lms[0] = Landmark::new(0.5, 0.7, 0.0);

        // Thumb chain: 1..=4, MCP at 2.
        let thumb_ys: [f64; 4] = if extended[0] {
            [0.625, 0.60, 0.525, 0.45]
        } else {
            [0.575, 0.60, 0.675, 0.75]
        };
        for (i, y) in thumb_ys.iter().enumerate() {
            lms[1 + i] = Landmark::new(FINGER_X[0], *y, 0.0);
        }

        // Index/middle/ring/pinky chains: base index 5, 9, 13, 17.
        for finger in 1..5 {
            let base = 1 + finger * 4;
            let ys: [f64; 4] = if extended[finger] {
                [0.60, 0.55, 0.50, 0.45]
            } else {
                [0.60, 0.65, 0.70, 0.75]
            };
            for (i, y) in ys.iter().enumerate() {
                lms[base + i] = Landmark::new(FINGER_X[finger], *y, 0.0);
            }
        }

        lms
    }

    /// Canonical closed fist (the "A" handshape).
    pub fn fist() -> Vec<Landmark> {
        hand_with_extensions([false; 5])
    }

    /// Fully open hand, wide enough to read as an open palm.
    pub fn open_palm() -> Vec<Landmark> {
        hand_with_extensions([true; 5])
    }
}
