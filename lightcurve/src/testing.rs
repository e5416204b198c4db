//! Test helpers shared across modules.

use crate::series::{Sample, Series};

/// Initialize a tracing subscriber that writes through the test harness.
/// Safe to call from every test. Respects `RUST_LOG`, defaults to "info".
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn series(pairs: &[(f64, f64)]) -> Series {
    pairs.iter().copied().map(Sample::from).collect()
}

/// Evenly sampled series `t = i * cadence` for `t < span`.
pub fn sampled(cadence: f64, span: f64, f: impl Fn(f64) -> f64) -> Series {
    (0..)
        .map(|i| i as f64 * cadence)
        .take_while(|&t| t < span)
        .map(|t| Sample::new(t, f(t)))
        .collect()
}
