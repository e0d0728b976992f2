//! Planar geometry helpers shared by every heuristic detector.
//!
//! All current heuristics work in the x/y image plane; z is ignored.

use crate::tracking::Landmark;

/// Euclidean distance between two landmarks in the x/y plane.
pub fn distance(p1: &Landmark, p2: &Landmark) -> f64 {
    ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2)).sqrt()
}

/// Angle in degrees at vertex `p2` between the rays to `p1` and `p3`,
/// in [0, 180]. Returns NaN for degenerate (zero-length) vectors;
/// callers treat NaN as "no match" rather than propagating it.
pub fn angle(p1: &Landmark, p2: &Landmark, p3: &Landmark) -> f64 {
    let v1 = (p1.x - p2.x, p1.y - p2.y);
    let v2 = (p3.x - p2.x, p3.y - p2.y);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    (dot / (mag1 * mag2)).acos().to_degrees()
}
