pub mod clock;
pub mod recognizer;
pub mod temporal;
pub mod voting;

pub use clock::{Clock, ManualClock, SystemClock};
pub use recognizer::{GestureRecognizer, RecognizedGesture};
pub use temporal::TemporalFilter;
