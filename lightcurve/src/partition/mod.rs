//! Bin-averaged reduction of a folded curve.
//!
//! The phase range `[min(phase), max(phase)]` is split into `M` equal-width
//! bins with `M = bins_per_sqrt * floor(sqrt(N))`. Bins are half-open except
//! the last, which is closed. Each non-empty bin contributes one point: the
//! mean phase and mean value of its members. Empty bins are dropped.
//!
//! Chord length of a raw fold grows with sample count and noise whatever the
//! period. Averaging within bins suppresses per-sample noise while keeping the
//! coarse shape that depends on phase alignment.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fold::{FoldedCurve, PhasePoint};


/// Partition resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// Bins per `floor(sqrt(N))`. `1` gives the reduction used by the period
    /// search; `2` gives a finer diagnostic partition.
    pub bins_per_sqrt: usize,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self { bins_per_sqrt: 1 }
    }
}

/// Largest accepted [`PartitionConfig::bins_per_sqrt`].
pub const MAX_BINS_PER_SQRT: usize = 64;

impl PartitionConfig {
    /// Number of bins for `n` points. Zero only for `n == 0`.
    #[inline]
    pub fn bin_count(&self, n: usize) -> usize {
        let per_sqrt = self.bins_per_sqrt.clamp(1, MAX_BINS_PER_SQRT);
        ((n as f64).sqrt() as usize).saturating_mul(per_sqrt)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_BINS_PER_SQRT).contains(&self.bins_per_sqrt) {
            return Err(Error::InvalidPartition {
                bins_per_sqrt: self.bins_per_sqrt,
                max: MAX_BINS_PER_SQRT,
            });
        }
        Ok(())
    }
}

/// Representative points of a folded curve, one per non-empty bin, ascending
/// by phase.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReducedCurve {
    points: Vec<PhasePoint>,
}

impl ReducedCurve {
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
}

/// Summary of one non-empty bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartitionBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    pub mean_phase: f64,
    pub mean_value: f64,
    /// Population standard deviation of the member phases.
    pub phase_std: f64,
    /// Population standard deviation of the member values.
    pub value_std: f64,
}

impl PartitionBin {
    #[inline]
    pub fn center(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    #[inline]
    pub fn representative(&self) -> PhasePoint {
        PhasePoint::new(self.mean_phase, self.mean_value)
    }
}

/// Reduces `curve` to `floor(sqrt(N))` bin averages.
pub fn reduce(curve: &FoldedCurve) -> ReducedCurve {
    reduce_with(curve, &PartitionConfig::default())
}

pub fn reduce_with(curve: &FoldedCurve, config: &PartitionConfig) -> ReducedCurve {
    let mut scratch = PartitionScratch::default();
    let mut points = Vec::new();
    reduce_into(curve.points(), config, &mut scratch, &mut points);
    ReducedCurve { points }
}

/// Per-bin statistics of `curve`, empty bins omitted.
pub fn partition_bins(curve: &FoldedCurve, config: &PartitionConfig) -> Vec<PartitionBin> {
    let points = curve.points();
    let mut scratch = PartitionScratch::default();
    let Some(layout) = scratch.accumulate(points, config) else {
        return Vec::new();
    };

    let mut phase_sq = vec![0.0; layout.bins];
    let mut value_sq = vec![0.0; layout.bins];
    for p in points {
        let idx = layout.index(p.phase);
        let sums = &scratch.sums[idx];
        let n = sums.count as f64;
        phase_sq[idx] += (p.phase - sums.phase / n).powi(2);
        value_sq[idx] += (p.value - sums.value / n).powi(2);
    }

    scratch
        .sums
        .iter()
        .enumerate()
        .filter(|(_, sums)| sums.count > 0)
        .map(|(idx, sums)| {
            let n = sums.count as f64;
            PartitionBin {
                lower: layout.edge(idx),
                upper: layout.edge(idx + 1),
                count: sums.count,
                mean_phase: sums.phase / n,
                mean_value: sums.value / n,
                phase_std: (phase_sq[idx] / n).sqrt(),
                value_std: (value_sq[idx] / n).sqrt(),
            }
        })
        .collect()
}

/// Reduces phase-sorted `points` into `out`, reusing `scratch` between calls.
pub(crate) fn reduce_into(
    points: &[PhasePoint],
    config: &PartitionConfig,
    scratch: &mut PartitionScratch,
    out: &mut Vec<PhasePoint>,
) {
    out.clear();
    if scratch.accumulate(points, config).is_none() {
        return;
    }
    out.extend(
        scratch
            .sums
            .iter()
            .filter(|sums| sums.count > 0)
            .map(|sums| {
                let n = sums.count as f64;
                PhasePoint::new(sums.phase / n, sums.value / n)
            }),
    );
}

#[derive(Debug, Clone, Copy, Default)]
struct BinSums {
    count: usize,
    phase: f64,
    value: f64,
}

/// Reusable per-bin accumulators.
#[derive(Debug, Default)]
pub(crate) struct PartitionScratch {
    sums: Vec<BinSums>,
}

impl PartitionScratch {
    /// Fills the bin sums for `points`. `None` when there are no points.
    fn accumulate(&mut self, points: &[PhasePoint], config: &PartitionConfig) -> Option<BinLayout> {
        let layout = BinLayout::new(points, config)?;
        self.sums.clear();
        self.sums.resize(layout.bins, BinSums::default());
        for p in points {
            let sums = &mut self.sums[layout.index(p.phase)];
            sums.count += 1;
            sums.phase += p.phase;
            sums.value += p.value;
        }
        Some(layout)
    }
}

/// Equal-width bins over `[lower, upper]`.
#[derive(Debug, Clone, Copy)]
struct BinLayout {
    lower: f64,
    upper: f64,
    bins: usize,
    width: f64,
}

impl BinLayout {
    fn new(points: &[PhasePoint], config: &PartitionConfig) -> Option<Self> {
        let bins = config.bin_count(points.len());
        if bins == 0 {
            return None;
        }
        let (lower, upper) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.phase), hi.max(p.phase))
            });
        Some(Self {
            lower,
            upper,
            bins,
            width: (upper - lower) / bins as f64,
        })
    }

    #[inline]
    fn index(&self, phase: f64) -> usize {
        if self.width <= 0.0 {
            return 0;
        }
        // Truncation of a non-negative offset; the maximum lands in the last bin.
        (((phase - self.lower) / self.width) as usize).min(self.bins - 1)
    }

    #[inline]
    fn edge(&self, idx: usize) -> f64 {
        if idx == self.bins {
            self.upper
        } else {
            self.lower + idx as f64 * self.width
        }
    }
}
