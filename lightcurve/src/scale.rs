//! Order-of-magnitude neighborhood radius from the depth of a dip.

/// Power of ten matching the order of magnitude of `mean_value - min_value`.
///
/// Returns `0.0` when the two are equal (flat curve, no usable scale).
/// Inputs must be finite.
///
/// ```
/// use lightcurve::estimate_radius;
///
/// assert_eq!(estimate_radius(1.0, 1.0), 0.0);
/// assert!((estimate_radius(1.0, 0.99) - 1e-2).abs() < 1e-15);
/// ```
pub fn estimate_radius(mean_value: f64, min_value: f64) -> f64 {
    debug_assert!(mean_value.is_finite() && min_value.is_finite());

    let depth = mean_value - min_value;
    if depth == 0.0 {
        return 0.0;
    }
    let exponent = depth.abs().log10().floor();
    10f64.powi(exponent as i32)
}
