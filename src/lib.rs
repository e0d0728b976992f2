//! Real-time sign-language gesture recognition over 21-point hand
//! landmarks: four independent geometric heuristics, weighted ensemble
//! voting, temporal debouncing, and sequence-to-word matching.
//!
//! The crate classifies poses produced by an external hand tracker; it
//! does no capture, rendering, or model inference of its own.

pub mod core;
pub mod detectors;
pub mod geometry;
pub mod gestures;
pub mod recognition;
pub mod sequence;
pub mod session;
pub mod tracking;

pub use recognition::{GestureRecognizer, RecognizedGesture};
pub use session::{SessionOutcome, TranslationSession};
pub use tracking::{HandFrame, Handedness, Landmark};
