use serde::{Deserialize, Serialize};

/// One tracked point of a hand pose, in normalized image coordinates
/// (x, y in [0, 1], z is relative depth as reported by the tracker).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Number of landmarks the tracker reports per hand.
pub const LANDMARK_COUNT: usize = 21;

/// Wrist landmark index.
pub const WRIST: usize = 0;

/// Middle-finger MCP, used as the palm center reference.
pub const PALM_CENTER: usize = 9;

/// Fingertip indices: thumb, index, middle, ring, pinky.
pub const FINGER_TIPS: [usize; 5] = [4, 8, 12, 16, 20];

/// Metacarpophalangeal (base) joint indices, matching FINGER_TIPS order.
pub const FINGER_MCPS: [usize; 5] = [2, 5, 9, 13, 17];
