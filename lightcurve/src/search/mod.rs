//! Curve-length period search.
//!
//! For every trial period of the grid the series is folded at the first
//! sample's time, optionally reduced to bin averages, and measured as a
//! polyline. The period with the extremal metric wins.
//!
//! # Metrics
//!
//! - [`SearchMode::Minimize`]: `length(fold(p))`
//! - [`SearchMode::Maximize`]: `length(reduce(fold(p))) / p`
//!
//! Trial periods are independent and are evaluated in parallel chunks; each
//! chunk reuses its fold and partition buffers across its periods. Any fold
//! error aborts the whole search.

mod config;
mod grid;
mod trace;


pub use config::{SearchConfig, SearchMode};
pub use grid::{PeriodGrid, MAX_GRID_LEN};
pub use trace::{PeriodTrace, SearchResult};

use common::parallel::{try_map_with, try_par_map_chunked};

use crate::error::{Error, Result};
use crate::fold::{fold_into, PhasePoint};
use crate::length::curve_length;
use crate::partition::{reduce_into, PartitionConfig, PartitionScratch};
use crate::series::{Sample, Series};

/// Period search engine bound to a validated configuration.
#[derive(Debug, Clone)]
pub struct PeriodSearch {
    config: SearchConfig,
    grid: PeriodGrid,
}

impl PeriodSearch {
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.partition.validate()?;
        let grid = config.grid()?;
        Ok(Self { config, grid })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn grid(&self) -> &PeriodGrid {
        &self.grid
    }

    /// Scans the grid over `series`.
    ///
    /// Fails with [`Error::InsufficientData`] for fewer than two samples.
    pub fn run(&self, series: &Series) -> Result<SearchResult> {
        series.require(2)?;
        let samples = series.samples();
        let epoch = samples[0].time;
        let mode = self.config.mode;
        let partition = self.config.partition;
        let periods = self.grid.to_vec();

        tracing::debug!(
            trials = periods.len(),
            samples = samples.len(),
            ?mode,
            parallel = self.config.parallel,
            "Starting period search"
        );

        let evaluate = |scratch: &mut TrialScratch, &period: &f64| {
            scratch.metric(samples, epoch, period, mode, &partition)
        };
        let metrics = if self.config.parallel {
            try_par_map_chunked(&periods, self.config.chunk_size, TrialScratch::default, evaluate)?
        } else {
            try_map_with(&periods, TrialScratch::default(), evaluate)?
        };

        let trace = PeriodTrace::new(periods, metrics);
        let best = trace
            .best_index(mode)
            .ok_or(Error::InsufficientData {
                found: 0,
                required: 1,
            })?;
        let best_period = trace.periods()[best];
        let best_metric = trace.metrics()[best];

        tracing::info!(best_period, best_metric, ?mode, "Period search finished");

        Ok(SearchResult {
            best_period,
            best_metric,
            mode,
            trace,
        })
    }
}

/// Runs a period search with `config` over `series`.
pub fn search(series: &Series, config: &SearchConfig) -> Result<SearchResult> {
    PeriodSearch::new(config.clone())?.run(series)
}

/// Metric of a single trial period, folded at the first sample's time.
pub fn period_metric(
    series: &Series,
    period: f64,
    mode: SearchMode,
    partition: &PartitionConfig,
) -> Result<f64> {
    series.require(2)?;
    let samples = series.samples();
    TrialScratch::default().metric(samples, samples[0].time, period, mode, partition)
}

/// Buffers reused across the trial periods of one work item.
#[derive(Debug, Default)]
struct TrialScratch {
    folded: Vec<PhasePoint>,
    reduced: Vec<PhasePoint>,
    partition: PartitionScratch,
}

impl TrialScratch {
    fn metric(
        &mut self,
        samples: &[Sample],
        epoch: f64,
        period: f64,
        mode: SearchMode,
        partition: &PartitionConfig,
    ) -> Result<f64> {
        fold_into(samples, period, epoch, &mut self.folded)?;
        let metric = match mode {
            SearchMode::Minimize => curve_length(&self.folded),
            SearchMode::Maximize => {
                reduce_into(&self.folded, partition, &mut self.partition, &mut self.reduced);
                curve_length(&self.reduced) / period
            }
        };
        Ok(metric)
    }
}
