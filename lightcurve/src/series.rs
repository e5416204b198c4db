//! Raw photometric time series.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One photometric measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.time.is_finite() && self.value.is_finite()
    }
}

impl From<(f64, f64)> for Sample {
    fn from((time, value): (f64, f64)) -> Self {
        Self { time, value }
    }
}

/// Time series of samples in caller order.
///
/// Times need not be sorted. The analysis functions treat the first sample in
/// input order as the fold reference epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Wraps samples that are already free of NaN and infinities.
    ///
    /// Non-finite samples are a caller bug; use [`Series::from_columns`] for
    /// unvalidated input.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        debug_assert!(
            samples.iter().all(Sample::is_finite),
            "Series::from_samples requires finite samples"
        );
        Self { samples }
    }

    /// Builds a series from parallel time and value columns, dropping every
    /// row where either column is NaN or infinite.
    pub fn from_columns(times: &[f64], values: &[f64]) -> Result<Self> {
        if times.len() != values.len() {
            return Err(Error::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }

        let samples: Vec<Sample> = times
            .iter()
            .zip(values)
            .map(|(&time, &value)| Sample { time, value })
            .filter(Sample::is_finite)
            .collect();

        let dropped = times.len() - samples.len();
        if dropped > 0 {
            tracing::warn!(
                dropped,
                kept = samples.len(),
                "Dropped non-finite samples from light curve"
            );
        }

        Ok(Self { samples })
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time of the first sample in input order.
    pub fn first_time(&self) -> Option<f64> {
        self.samples.first().map(|s| s.time)
    }

    /// `max(time) - min(time)`, or `None` for an empty series.
    pub fn time_span(&self) -> Option<f64> {
        let first = self.samples.first()?;
        let (min, max) = self
            .samples
            .iter()
            .fold((first.time, first.time), |(lo, hi), s| {
                (lo.min(s.time), hi.max(s.time))
            });
        Some(max - min)
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.time)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }

    pub(crate) fn require(&self, required: usize) -> Result<()> {
        if self.samples.len() < required {
            return Err(Error::InsufficientData {
                found: self.samples.len(),
                required,
            });
        }
        Ok(())
    }
}

impl FromIterator<Sample> for Series {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::from_samples(iter.into_iter().collect())
    }
}
