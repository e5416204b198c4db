//! Synthetic transit light curves.
//!
//! Evenly sampled normalized flux (baseline 1.0) with a periodic dip and
//! seeded Gaussian noise. The dip starts whenever `t mod period == 0` and
//! lasts `duration`.
//!
//! ```rust
//! use lightcurve::synthetic::{SyntheticTransit, TransitShape};
//!
//! let series = SyntheticTransit {
//!     shape: TransitShape::Parabolic,
//!     seed: 7,
//!     ..SyntheticTransit::default()
//! }
//! .generate()?;
//! assert!(series.len() > 10_000);
//! # Ok::<(), lightcurve::Error>(())
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::series::{Sample, Series};

/// Profile of the dip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitShape {
    /// Constant depth for the whole duration.
    #[default]
    Box,
    /// Parabola through `(0, 0)`, `(duration / 2, depth)` and `(duration, 0)`.
    Parabolic,
    /// No dip; noise only.
    Flat,
}

/// Parameters of a synthetic light curve. Times and durations share one unit
/// (days in the defaults).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticTransit {
    /// Sampling interval (~30 s by default).
    pub cadence: f64,
    /// Observation length; samples cover `[0, span)`.
    pub span: f64,
    pub depth: f64,
    pub period: f64,
    pub duration: f64,
    /// Standard deviation of the additive Gaussian noise.
    pub sigma: f64,
    pub shape: TransitShape,
    pub seed: u64,
}

impl Default for SyntheticTransit {
    fn default() -> Self {
        Self {
            cadence: 0.00035,
            span: 5.0,
            depth: 0.01,
            period: 1.0,
            duration: 0.1,
            sigma: 0.001,
            shape: TransitShape::Box,
            seed: 0,
        }
    }
}

impl SyntheticTransit {
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("cadence", self.cadence),
            ("span", self.span),
            ("period", self.period),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidSynthetic { name, value });
            }
        }
        let non_negative = [
            ("depth", self.depth),
            ("duration", self.duration),
            ("sigma", self.sigma),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidSynthetic { name, value });
            }
        }
        Ok(())
    }

    /// Noise-free flux at `time`.
    pub fn flux_at(&self, time: f64) -> f64 {
        let phase = time.rem_euclid(self.period);
        if phase >= self.duration {
            return 1.0;
        }
        match self.shape {
            TransitShape::Box => 1.0 - self.depth,
            TransitShape::Parabolic => {
                let d = self.duration;
                1.0 - 4.0 * self.depth * phase * (d - phase) / (d * d)
            }
            TransitShape::Flat => 1.0,
        }
    }

    /// Sample times `i * cadence` below `span`.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0u64..)
            .map(move |i| i as f64 * self.cadence)
            .take_while(move |&t| t < self.span)
    }

    pub fn generate(&self) -> Result<Series> {
        self.validate()?;
        let normal = Normal::new(0.0, self.sigma).map_err(|_| Error::InvalidSynthetic {
            name: "sigma",
            value: self.sigma,
        })?;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        let samples: Vec<Sample> = self
            .times()
            .map(|t| Sample::new(t, self.flux_at(t) + normal.sample(&mut rng)))
            .collect();

        tracing::debug!(
            samples = samples.len(),
            shape = ?self.shape,
            seed = self.seed,
            "Generated synthetic light curve"
        );
        Ok(Series::from_samples(samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use common::float_ext::FloatExt;

    #[test]
    fn test_default_sample_count() {
        let synth = SyntheticTransit::default();
        let n = synth.times().count();
        // 5.0 / 0.00035 = 14285.7
        assert_eq!(n, 14286);
    }

    #[test]
    fn test_box_profile() {
        let synth = SyntheticTransit::default();
        assert_eq!(synth.flux_at(0.0), 0.99);
        assert_eq!(synth.flux_at(2.05), 0.99);
        assert_eq!(synth.flux_at(0.1), 1.0);
        assert_eq!(synth.flux_at(3.5), 1.0);
    }

    #[test]
    fn test_parabolic_profile() {
        let synth = SyntheticTransit {
            shape: TransitShape::Parabolic,
            ..SyntheticTransit::default()
        };
        assert!(synth.flux_at(0.0).approx_eq_eps(1.0, 1e-12));
        assert!(synth.flux_at(0.05).approx_eq_eps(0.99, 1e-12));
        assert!(synth.flux_at(1.025).approx_eq_eps(1.0 - 0.0075, 1e-9));
        assert_eq!(synth.flux_at(0.5), 1.0);
    }

    #[test]
    fn test_flat_profile_has_no_dip() {
        let synth = SyntheticTransit {
            shape: TransitShape::Flat,
            ..SyntheticTransit::default()
        };
        assert_eq!(synth.flux_at(0.01), 1.0);
    }

    #[test]
    fn test_noise_free_generation_matches_profile() {
        let synth = SyntheticTransit {
            sigma: 0.0,
            cadence: 0.01,
            ..SyntheticTransit::default()
        };
        let series = synth.generate().unwrap();
        assert_eq!(series.len(), 500);
        for s in series.samples() {
            assert_eq!(s.value, synth.flux_at(s.time));
        }
    }

    #[test]
    fn test_seed_reproducibility() {
        let a = SyntheticTransit {
            seed: 11,
            ..SyntheticTransit::default()
        };
        let b = SyntheticTransit {
            seed: 12,
            ..a.clone()
        };
        assert_eq!(a.generate().unwrap(), a.generate().unwrap());
        assert_ne!(a.generate().unwrap(), b.generate().unwrap());
    }

    #[test]
    fn test_noise_level() {
        let synth = SyntheticTransit {
            shape: TransitShape::Flat,
            sigma: 0.002,
            seed: 3,
            ..SyntheticTransit::default()
        };
        let series = synth.generate().unwrap();
        let n = series.len() as f64;
        let mean = series.values().sum::<f64>() / n;
        let var = series.values().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        assert!(mean.approx_eq_eps(1.0, 1e-4), "mean {mean}");
        assert!(var.sqrt().approx_eq_eps(0.002, 1e-4), "std {}", var.sqrt());
    }

    #[test]
    fn test_invalid_parameters() {
        let cases = [
            SyntheticTransit {
                cadence: 0.0,
                ..SyntheticTransit::default()
            },
            SyntheticTransit {
                period: -1.0,
                ..SyntheticTransit::default()
            },
            SyntheticTransit {
                sigma: f64::NAN,
                ..SyntheticTransit::default()
            },
            SyntheticTransit {
                depth: -0.01,
                ..SyntheticTransit::default()
            },
        ];
        for synth in &cases {
            let err = synth.generate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }
}
