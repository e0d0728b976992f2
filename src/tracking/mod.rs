pub mod frame;
pub mod landmarks;

pub use frame::{FrameError, HandFrame, Handedness};
pub use landmarks::{Landmark, FINGER_MCPS, FINGER_TIPS, LANDMARK_COUNT, PALM_CENTER, WRIST};
