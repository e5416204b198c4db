//! Noise-resistant location of the minimum of a folded curve.
//!
//! A plain argmin picks up single-sample noise spikes. Instead, candidates
//! are visited from the lowest value upwards and a candidate is accepted only
//! when enough other points lie within `radius` of it in the `(phase, value)`
//! plane. The bottom of a real dip is supported by many samples at nearly the
//! same level; an outlier is not.
//!
//! [`locate_minimum`] is greedy: it returns the lowest-valued candidate that
//! qualifies, not the densest one. [`locate_densest`] scans the same order but
//! keeps the candidate with the most neighbors.


use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::fold::{FoldedCurve, PhasePoint};

/// Neighbor count used when none is configured.
pub const DEFAULT_MIN_NEIGHBORS: usize = 10;

/// An accepted minimum candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumLocation {
    pub phase: f64,
    pub value: f64,
    /// Points other than the candidate strictly closer than the radius.
    pub neighbors: usize,
    /// Position of the candidate in ascending-value order (0 = global minimum).
    pub rank: usize,
}

impl MinimumLocation {
    pub fn point(&self) -> PhasePoint {
        PhasePoint::new(self.phase, self.value)
    }
}

/// Phase of the lowest point supported by at least `min_neighbors` other
/// points within Euclidean distance `< radius`.
///
/// Points of equal value are visited in phase order. `min_neighbors == 0`
/// accepts the global minimum.
///
/// Fails with [`Error::InvalidRadius`] unless `radius` is positive and finite,
/// and with [`Error::NotFound`] when no candidate qualifies.
pub fn locate_minimum(
    curve: &FoldedCurve,
    radius: f64,
    min_neighbors: usize,
) -> Result<MinimumLocation> {
    let points = curve.points();
    let order = candidate_order(points, radius)?;

    for (rank, &index) in order.iter().enumerate() {
        let neighbors = count_neighbors(points, index, radius);
        if neighbors >= min_neighbors {
            let location = MinimumLocation {
                phase: points[index].phase,
                value: points[index].value,
                neighbors,
                rank,
            };
            tracing::debug!(
                phase = location.phase,
                value = location.value,
                neighbors,
                rank,
                radius,
                "Located minimum"
            );
            return Ok(location);
        }
    }

    Err(Error::NotFound {
        examined: order.len(),
        min_neighbors,
        radius,
    })
}

/// Candidate with the most neighbors within `radius`, visiting points from
/// the lowest value upwards.
///
/// The scan stops at the first candidate with `saturation` neighbors or more.
/// Among equally dense candidates the lower-valued one wins. Fails with
/// [`Error::NotFound`] when no point has any neighbor.
pub fn locate_densest(
    curve: &FoldedCurve,
    radius: f64,
    saturation: usize,
) -> Result<MinimumLocation> {
    let points = curve.points();
    let order = candidate_order(points, radius)?;
    let saturation = saturation.max(1);

    let mut best: Option<MinimumLocation> = None;
    let mut examined = 0;
    for (rank, &index) in order.iter().enumerate() {
        examined += 1;
        let neighbors = count_neighbors(points, index, radius);
        if best.map_or(true, |b| neighbors > b.neighbors) {
            best = Some(MinimumLocation {
                phase: points[index].phase,
                value: points[index].value,
                neighbors,
                rank,
            });
        }
        if neighbors >= saturation {
            break;
        }
    }

    match best {
        Some(location) if location.neighbors > 0 => {
            tracing::debug!(
                phase = location.phase,
                neighbors = location.neighbors,
                examined,
                "Located densest minimum"
            );
            Ok(location)
        }
        _ => Err(Error::NotFound {
            examined,
            min_neighbors: 1,
            radius,
        }),
    }
}

fn validate_radius(radius: f64) -> Result<()> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(Error::InvalidRadius { radius });
    }
    Ok(())
}

/// Indices into the phase-sorted `points`, stably sorted by value.
fn candidate_order(points: &[PhasePoint], radius: f64) -> Result<Vec<usize>> {
    validate_radius(radius)?;
    if points.is_empty() {
        return Err(Error::InsufficientData {
            found: 0,
            required: 1,
        });
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        points[a]
            .value
            .partial_cmp(&points[b].value)
            .unwrap_or(Ordering::Equal)
    });
    Ok(order)
}

/// Points other than `points[index]` closer than `radius` to it.
///
/// `points` is sorted by phase, so only the run of points whose phase is
/// within `radius` on either side needs a distance check.
fn count_neighbors(points: &[PhasePoint], index: usize, radius: f64) -> usize {
    let center = points[index];
    let within = |p: &PhasePoint| center.distance(p) < radius;

    let below = points[..index]
        .iter()
        .rev()
        .take_while(|p| (center.phase - p.phase).abs() < radius)
        .filter(|p| within(*p))
        .count();
    let above = points[index + 1..]
        .iter()
        .take_while(|p| (p.phase - center.phase).abs() < radius)
        .filter(|p| within(*p))
        .count();
    below + above
}
