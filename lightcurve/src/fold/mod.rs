//! Phase folding of a time series at a trial period.
//!
//! Every fold is a pure function of `(series, period, epoch)` and produces a
//! fresh [`FoldedCurve`] sorted by phase. Samples with equal phase keep their
//! input order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scale::estimate_radius;
use crate::series::{Sample, Series};

#[cfg(test)]
mod tests;

/// A `(phase, value)` point of a folded or reduced curve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhasePoint {
    pub phase: f64,
    pub value: f64,
}

impl PhasePoint {
    pub fn new(phase: f64, value: f64) -> Self {
        Self { phase, value }
    }

    #[inline]
    pub fn distance(&self, other: &PhasePoint) -> f64 {
        (other.phase - self.phase).hypot(other.value - self.value)
    }
}

/// Samples mapped to `[0, period)` and sorted ascending by phase.
///
/// Deserialization checks the phase range and restores the phase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFoldedCurve")]
pub struct FoldedCurve {
    period: f64,
    epoch: f64,
    points: Vec<PhasePoint>,
}

#[derive(Deserialize)]
struct RawFoldedCurve {
    period: f64,
    epoch: f64,
    points: Vec<PhasePoint>,
}

impl TryFrom<RawFoldedCurve> for FoldedCurve {
    type Error = Error;

    fn try_from(raw: RawFoldedCurve) -> Result<Self> {
        let RawFoldedCurve {
            period,
            epoch,
            mut points,
        } = raw;
        validate_period(period)?;
        let outside = |p: &&PhasePoint| {
            !(p.phase >= 0.0 && p.phase < period && p.value.is_finite())
        };
        if let Some(p) = points.iter().find(outside) {
            return Err(Error::InvalidPoint {
                phase: p.phase,
                value: p.value,
                period,
            });
        }
        sort_by_phase(&mut points);
        Ok(Self {
            period,
            epoch,
            points,
        })
    }
}

impl FoldedCurve {
    #[inline]
    pub fn period(&self) -> f64 {
        self.period
    }

    #[inline]
    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    #[inline]
    pub fn points(&self) -> &[PhasePoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<PhasePoint> {
        self.points
    }

    /// Arithmetic mean of the values.
    pub fn mean_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum::<f64>() / self.points.len() as f64
    }

    pub fn min_value(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.value)
            .fold(f64::INFINITY, f64::min)
    }

    /// Neighborhood radius matched to the depth of the curve's dip, see
    /// [`estimate_radius`].
    pub fn neighborhood_radius(&self) -> f64 {
        estimate_radius(self.mean_value(), self.min_value())
    }

    /// Points with phases shifted into `[-period/2, period/2)`, sorted by phase.
    ///
    /// Places a feature at phase zero in the middle of the curve instead of
    /// splitting it across both ends.
    pub fn centered(&self) -> Vec<PhasePoint> {
        let half = self.period * 0.5;
        let mut points: Vec<PhasePoint> = self
            .points
            .iter()
            .map(|p| {
                let phase = if p.phase >= half {
                    p.phase - self.period
                } else {
                    p.phase
                };
                PhasePoint::new(phase, p.value)
            })
            .collect();
        sort_by_phase(&mut points);
        points
    }

    /// Centered points with `|phase| <= half_width`.
    pub fn transit_window(&self, half_width: f64) -> Vec<PhasePoint> {
        self.centered()
            .into_iter()
            .filter(|p| p.phase.abs() <= half_width)
            .collect()
    }
}

/// Folds `series` at `period` with time origin `epoch`.
///
/// Fails with [`Error::InvalidPeriod`] for a non-positive or non-finite period
/// and with [`Error::InsufficientData`] for fewer than two samples.
pub fn fold(series: &Series, period: f64, epoch: f64) -> Result<FoldedCurve> {
    series.require(2)?;
    let mut points = Vec::with_capacity(series.len());
    fold_into(series.samples(), period, epoch, &mut points)?;
    Ok(FoldedCurve {
        period,
        epoch,
        points,
    })
}

/// Folds into a reusable buffer. `out` is cleared first.
pub(crate) fn fold_into(
    samples: &[Sample],
    period: f64,
    epoch: f64,
    out: &mut Vec<PhasePoint>,
) -> Result<()> {
    validate_period(period)?;
    out.clear();
    out.extend(
        samples
            .iter()
            .map(|s| PhasePoint::new(phase_of(s.time, period, epoch), s.value)),
    );
    sort_by_phase(out);
    Ok(())
}

pub(crate) fn validate_period(period: f64) -> Result<()> {
    if !(period.is_finite() && period > 0.0) {
        return Err(Error::InvalidPeriod { period });
    }
    Ok(())
}

/// `(time - epoch) mod period` in `[0, period)`.
#[inline]
pub fn phase_of(time: f64, period: f64, epoch: f64) -> f64 {
    let phase = (time - epoch).rem_euclid(period);
    // rem_euclid rounds up to `period` for offsets just below a multiple of it
    if phase >= period {
        0.0
    } else {
        phase
    }
}

/// Stable sort, so equal phases keep their relative order. `-0.0` and `0.0`
/// compare equal.
#[inline]
fn sort_by_phase(points: &mut [PhasePoint]) {
    points.sort_by(|a, b| a.phase.partial_cmp(&b.phase).unwrap_or(Ordering::Equal));
}
