//! Configuration for the period search.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::partition::PartitionConfig;
use crate::search::grid::PeriodGrid;
use crate::series::Series;

/// Which extremum of the curve-length metric marks the period.
///
/// The two modes measure different things and are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Minimize the chord length of the raw folded curve.
    ///
    /// At the true period, neighbouring phases carry neighbouring values and
    /// the fold traces a short path.
    #[default]
    Minimize,
    /// Maximize the chord length of the partition-reduced curve divided by
    /// the trial period.
    ///
    /// Bin averaging removes the noise contribution; what remains is the
    /// depth of the dip, which is sharpest when the transits line up.
    ///
    /// Coarser than [`SearchMode::Minimize`]: on a fine grid the peak tends to
    /// sit a few steps above the true period.
    Maximize,
}

/// Period search parameters.
///
/// Defaults match a few-day photometric run sampled at ~30 s cadence:
/// trial periods from 0.5 to 5.0 days in 0.001 day steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Smallest trial period (inclusive).
    pub period_min: f64,
    /// Upper bound of the grid (exclusive).
    pub period_max: f64,
    /// Grid step. Should not exceed the sampling cadence.
    pub step: f64,
    pub mode: SearchMode,
    /// Partition used by [`SearchMode::Maximize`].
    pub partition: PartitionConfig,
    /// Evaluate trial periods on the rayon thread pool.
    pub parallel: bool,
    /// Trial periods per parallel work item. `0` picks a size from the
    /// number of worker threads.
    pub chunk_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            period_min: 0.5,
            period_max: 5.0,
            step: 0.001,
            mode: SearchMode::default(),
            partition: PartitionConfig::default(),
            parallel: true,
            chunk_size: 0,
        }
    }
}

impl SearchConfig {
    pub fn new(period_min: f64, period_max: f64, step: f64, mode: SearchMode) -> Self {
        Self {
            period_min,
            period_max,
            step,
            mode,
            ..Self::default()
        }
    }

    /// Sets `period_max` to the time span of `series`, the longest period a
    /// single observation run can show twice.
    pub fn spanning(mut self, series: &Series) -> Self {
        if let Some(span) = series.time_span() {
            self.period_max = span;
        }
        self
    }

    pub fn grid(&self) -> Result<PeriodGrid> {
        PeriodGrid::new(self.period_min, self.period_max, self.step)
    }

    pub fn validate(&self) -> Result<()> {
        self.grid()?;
        self.partition.validate()
    }
}
