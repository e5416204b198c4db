//! Polyline length of an ordered point sequence.

use crate::fold::PhasePoint;

/// Sum of Euclidean distances between consecutive points, in the order given.
///
/// Returns `0.0` for fewer than two points.
pub fn curve_length(points: &[PhasePoint]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}
