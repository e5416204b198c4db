//! Trial period grid `[period_min, period_max)` with a fixed step.

use serde::Serialize;

use crate::error::{Error, Result};

/// Largest number of trial periods a grid may hold.
pub const MAX_GRID_LEN: usize = 10_000_000;

/// Trial periods `period_min + i * step` for every `i` with a value below
/// `period_max`.
///
/// Periods are computed from the index rather than accumulated, so the grid
/// does not drift over thousands of steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodGrid {
    period_min: f64,
    period_max: f64,
    step: f64,
    len: usize,
}

impl PeriodGrid {
    /// Fails with [`Error::InvalidGrid`] for a degenerate range or step, or
    /// when the grid would hold more than [`MAX_GRID_LEN`] periods.
    pub fn new(period_min: f64, period_max: f64, step: f64) -> Result<Self> {
        let invalid = || Error::InvalidGrid {
            period_min,
            period_max,
            step,
        };
        let valid = period_min.is_finite()
            && period_max.is_finite()
            && step.is_finite()
            && period_min > 0.0
            && step > 0.0
            && period_min < period_max;
        if !valid {
            return Err(invalid());
        }

        let span_steps = ((period_max - period_min) / step).ceil();
        if !(span_steps <= MAX_GRID_LEN as f64) {
            return Err(invalid());
        }

        let mut len = span_steps as usize;
        while len > 0 && period_min + (len - 1) as f64 * step >= period_max {
            len -= 1;
        }
        // ceil can undershoot by one when the quotient rounds down
        while period_min + len as f64 * step < period_max {
            len += 1;
        }

        if len > MAX_GRID_LEN {
            return Err(invalid());
        }

        Ok(Self {
            period_min,
            period_max,
            step,
            len,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[inline]
    pub fn period(&self, index: usize) -> f64 {
        self.period_min + index as f64 * self.step
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.period(i))
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}
