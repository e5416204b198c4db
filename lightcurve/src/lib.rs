//! Lightcurve - period search and transit centering for photometric time series.
//!
//! This library provides:
//! - Phase folding of a time series at a trial period
//! - Curve-length period search over a grid of trial periods
//! - Bin-averaged reduction of folded curves
//! - Noise-resistant location of a fold's minimum and re-centering on it
//! - Synthetic transit light curves for tests and benchmarks
//!
//! # Quick Start
//!
//! ```rust
//! use lightcurve::synthetic::SyntheticTransit;
//! use lightcurve::{analyze, AnalysisConfig, SearchConfig, SearchMode};
//!
//! let series = SyntheticTransit {
//!     cadence: 0.002,
//!     ..SyntheticTransit::default()
//! }
//! .generate()?;
//!
//! let config = AnalysisConfig {
//!     search: SearchConfig::new(0.8, 1.25, 0.001, SearchMode::Minimize),
//!     ..AnalysisConfig::default()
//! };
//! let analysis = analyze(&series, &config)?;
//!
//! assert!((analysis.period() - 1.0).abs() <= 0.001 + 1e-9);
//! # Ok::<(), lightcurve::Error>(())
//! ```

mod error;
mod fold;
mod length;
mod minimum;
mod partition;
mod pipeline;
mod scale;
mod search;
mod series;
pub mod synthetic;

#[cfg(test)]
pub(crate) mod testing;

// ============================================================================
// Core types
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use series::{Sample, Series};

// ============================================================================
// Folding and measurement
// ============================================================================

pub use fold::{fold, phase_of, FoldedCurve, PhasePoint};
pub use length::curve_length;
pub use partition::{
    partition_bins, reduce, reduce_with, PartitionBin, PartitionConfig, ReducedCurve,
    MAX_BINS_PER_SQRT,
};
pub use scale::estimate_radius;

// ============================================================================
// Period search
// ============================================================================

pub use search::{
    period_metric, search, PeriodGrid, PeriodSearch, PeriodTrace, SearchConfig, SearchMode,
    SearchResult, MAX_GRID_LEN,
};

// ============================================================================
// Minimum location and centering
// ============================================================================

pub use minimum::{locate_densest, locate_minimum, MinimumLocation, DEFAULT_MIN_NEIGHBORS};
pub use pipeline::{analyze, center, AnalysisConfig, Centering, CenteringConfig, TransitAnalysis};
