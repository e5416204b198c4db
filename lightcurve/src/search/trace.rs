//! Search diagnostics: the metric at every trial period.

use serde::{Deserialize, Serialize};

use crate::search::config::SearchMode;

/// Parallel arrays of trial periods and their metric values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodTrace {
    periods: Vec<f64>,
    metrics: Vec<f64>,
}

impl PeriodTrace {
    pub(crate) fn new(periods: Vec<f64>, metrics: Vec<f64>) -> Self {
        debug_assert_eq!(periods.len(), metrics.len());
        Self { periods, metrics }
    }

    #[inline]
    pub fn periods(&self) -> &[f64] {
        &self.periods
    }

    #[inline]
    pub fn metrics(&self) -> &[f64] {
        &self.metrics
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.periods.iter().copied().zip(self.metrics.iter().copied())
    }

    /// Index of the extremal metric for `mode`. The first (lowest-period)
    /// index wins ties.
    pub fn best_index(&self, mode: SearchMode) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, &metric) in self.metrics.iter().enumerate() {
            let better = match best {
                None => true,
                Some((_, current)) => match mode {
                    SearchMode::Minimize => metric < current,
                    SearchMode::Maximize => metric > current,
                },
            };
            if better {
                best = Some((idx, metric));
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Sub-trace of the periods within `half_width` of `center`.
    pub fn window(&self, center: f64, half_width: f64) -> PeriodTrace {
        let start = self.periods.partition_point(|&p| p < center - half_width);
        let end = self.periods.partition_point(|&p| p <= center + half_width);
        let end = end.max(start);
        PeriodTrace {
            periods: self.periods[start..end].to_vec(),
            metrics: self.metrics[start..end].to_vec(),
        }
    }
}

/// Outcome of a period search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_period: f64,
    pub best_metric: f64,
    pub mode: SearchMode,
    pub trace: PeriodTrace,
}
