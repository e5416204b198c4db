//! End-to-end transit analysis.
//!
//! ```text
//! series ─► period search ─► raw fold (epoch = first time)
//!                                 │
//!                                 ▼
//!              radius ─► minimum location ─► centered fold
//!                                            (epoch = first time + minimum phase)
//! ```
//!
//! [`analyze`] runs the whole chain. [`center`] starts from a known period,
//! for light curves whose period comes from elsewhere.

mod config;


pub use config::{AnalysisConfig, CenteringConfig};

use crate::error::{Error, Result};
use crate::fold::{fold, FoldedCurve};
use crate::minimum::{locate_minimum, MinimumLocation};
use crate::search::{search, SearchResult};
use crate::series::Series;

/// A fold shifted so that the located minimum sits at phase zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Centering {
    pub period: f64,
    /// Fold anchored at the first sample's time.
    pub raw: FoldedCurve,
    /// Neighborhood radius used by the minimum locator.
    pub radius: f64,
    /// Minimum located on the raw fold.
    pub minimum: MinimumLocation,
    /// First sample's time plus the minimum's phase.
    pub epoch: f64,
    pub centered: FoldedCurve,
}

/// Result of [`analyze`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransitAnalysis {
    pub search: SearchResult,
    pub centering: Centering,
}

impl TransitAnalysis {
    pub fn period(&self) -> f64 {
        self.search.best_period
    }

    pub fn epoch(&self) -> f64 {
        self.centering.epoch
    }
}

/// Folds `series` at a known `period` and re-folds it with the located
/// minimum at phase zero.
///
/// A flat raw fold has no usable radius estimate and fails with
/// [`Error::NotFound`] without examining any candidate. Errors from folding
/// and from the minimum locator are returned unchanged.
pub fn center(series: &Series, period: f64, config: &CenteringConfig) -> Result<Centering> {
    config.validate()?;
    series.require(2)?;
    let first_time = series.samples()[0].time;

    let raw = fold(series, period, first_time)?;
    let radius = match config.radius {
        Some(radius) => radius,
        None => raw.neighborhood_radius(),
    };
    if radius == 0.0 {
        tracing::debug!(period, "Flat fold, no neighborhood radius");
        return Err(Error::NotFound {
            examined: 0,
            min_neighbors: config.min_neighbors,
            radius,
        });
    }

    let minimum = locate_minimum(&raw, radius, config.min_neighbors)?;
    let epoch = first_time + minimum.phase;
    let centered = fold(series, period, epoch)?;

    tracing::debug!(period, radius, epoch, phase = minimum.phase, "Centered fold");

    Ok(Centering {
        period,
        raw,
        radius,
        minimum,
        epoch,
        centered,
    })
}

/// Searches the period of `series` and centers the fold at it.
pub fn analyze(series: &Series, config: &AnalysisConfig) -> Result<TransitAnalysis> {
    config.validate()?;
    let search = search(series, &config.search)?;
    let centering = center(series, search.best_period, &config.centering)?;

    tracing::info!(
        period = search.best_period,
        epoch = centering.epoch,
        samples = series.len(),
        "Transit analysis finished"
    );

    Ok(TransitAnalysis { search, centering })
}
