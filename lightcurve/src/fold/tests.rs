//! Tests for phase folding.

use super::*;
use crate::error::ErrorKind;
use crate::testing::{sampled, series};
use common::float_ext::FloatExt;

#[test]
fn test_two_point_series_in_range() {
    let s = series(&[(0.0, 0.0), (1.0, 1.0)]);
    let folded = fold(&s, 2.0, 0.0).unwrap();

    assert_eq!(
        folded.points(),
        &[PhasePoint::new(0.0, 0.0), PhasePoint::new(1.0, 1.0)]
    );
    assert_eq!(folded.period(), 2.0);
    assert_eq!(folded.epoch(), 0.0);
}

#[test]
fn test_phase_wraps_and_sorts() {
    let s = series(&[(0.0, 1.0), (1.25, 2.0), (2.5, 3.0), (3.75, 4.0)]);
    let folded = fold(&s, 1.0, 0.0).unwrap();
    let phases: Vec<f64> = folded.points().iter().map(|p| p.phase).collect();
    let values: Vec<f64> = folded.points().iter().map(|p| p.value).collect();

    assert_eq!(phases, vec![0.0, 0.25, 0.5, 0.75]);
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_epoch_shifts_origin() {
    let s = series(&[(10.0, 1.0), (10.3, 2.0), (10.6, 3.0)]);
    let folded = fold(&s, 0.5, 10.3).unwrap();
    let phases: Vec<f64> = folded.points().iter().map(|p| p.phase).collect();

    // 10.0 - 10.3 = -0.3 -> 0.2; 10.3 -> 0; 10.6 -> 0.3
    assert!(phases[0].approx_eq_eps(0.0, 1e-12));
    assert!(phases[1].approx_eq_eps(0.2, 1e-12));
    assert!(phases[2].approx_eq_eps(0.3, 1e-12));
    assert_eq!(folded.points()[1].value, 1.0);
}

#[test]
fn test_times_before_epoch_fold_into_range() {
    let s = series(&[(-7.3, 0.0), (-0.01, 1.0), (0.0, 2.0)]);
    let folded = fold(&s, 1.0, 0.0).unwrap();
    for p in folded.points() {
        assert!((0.0..1.0).contains(&p.phase), "phase {} out of range", p.phase);
    }
}

#[test]
fn test_equal_phases_keep_input_order() {
    let s = series(&[(0.5, 3.0), (1.5, 1.0), (2.5, 2.0), (0.0, 9.0)]);
    let folded = fold(&s, 1.0, 0.0).unwrap();
    let values: Vec<f64> = folded.points().iter().map(|p| p.value).collect();
    assert_eq!(values, vec![9.0, 3.0, 1.0, 2.0]);
}

#[test]
fn test_phase_range_invariant_on_dense_series() {
    let s = sampled(0.00035, 5.0, |t| (t * 7.0).sin());
    for &period in &[0.5, 0.731, 1.0, 2.999, 4.9] {
        let folded = fold(&s, period, s.first_time().unwrap()).unwrap();
        assert_eq!(folded.len(), s.len());
        assert!(folded
            .points()
            .iter()
            .all(|p| p.phase >= 0.0 && p.phase < period));
        assert!(folded.points().windows(2).all(|w| w[0].phase <= w[1].phase));
    }
}

#[test]
fn test_fold_is_deterministic() {
    let s = sampled(0.01, 3.0, |t| 1.0 - 0.01 * (t * 3.0).cos());
    let a = fold(&s, 0.77, 0.0).unwrap();
    let b = fold(&s, 0.77, 0.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_fold_does_not_mutate_series() {
    let s = series(&[(3.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    let before = s.clone();
    fold(&s, 1.5, 0.0).unwrap();
    assert_eq!(s, before);
}

#[test]
fn test_invalid_period_rejected() {
    let s = series(&[(0.0, 1.0), (1.0, 1.0)]);
    for &period in &[0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = fold(&s, period, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_single_sample_is_insufficient() {
    let s = series(&[(0.0, 1.0)]);
    let err = fold(&s, 1.0, 0.0).unwrap_err();
    assert!(matches!(
        err,
        Error::InsufficientData {
            found: 1,
            required: 2
        }
    ));
}

#[test]
fn test_phase_of_never_returns_period() {
    // -1e-17 mod 1.0 rounds to 1.0 with a plain rem_euclid
    let phase = phase_of(-1e-17, 1.0, 0.0);
    assert!((0.0..1.0).contains(&phase));
}

#[test]
fn test_mean_min_and_radius() {
    let s = series(&[(0.0, 1.0), (0.1, 1.0), (0.2, 0.96), (0.3, 1.0)]);
    let folded = fold(&s, 1.0, 0.0).unwrap();
    assert!(folded.mean_value().approx_eq_eps(0.99, 1e-12));
    assert_eq!(folded.min_value(), 0.96);
    assert!(folded.neighborhood_radius().approx_eq_eps(0.01, 1e-15));
}

#[test]
fn test_flat_curve_has_zero_radius() {
    let s = sampled(0.01, 2.0, |_| 1.0);
    let folded = fold(&s, 0.7, 0.0).unwrap();
    assert_eq!(folded.neighborhood_radius(), 0.0);
}

#[test]
fn test_centered_range_and_order() {
    let s = series(&[(0.1, 1.0), (0.6, 2.0), (0.9, 3.0), (0.4, 4.0)]);
    let folded = fold(&s, 1.0, 0.0).unwrap();
    let centered = folded.centered();
    let phases: Vec<f64> = centered.iter().map(|p| p.phase).collect();
    let values: Vec<f64> = centered.iter().map(|p| p.value).collect();

    assert!(phases.iter().all(|&p| (-0.5..0.5).contains(&p)));
    assert!(phases.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(values, vec![2.0, 3.0, 1.0, 4.0]);
}

#[test]
fn test_transit_window_keeps_points_near_zero() {
    let s = series(&[(0.02, 0.9), (0.97, 0.9), (0.5, 1.0), (0.2, 1.0), (0.8, 1.0)]);
    let folded = fold(&s, 1.0, 0.0).unwrap();
    let window = folded.transit_window(0.05);

    assert_eq!(window.len(), 2);
    assert!(window.iter().all(|p| p.value == 0.9));
    assert!(window[0].phase < 0.0 && window[1].phase > 0.0);
}

#[test]
fn test_point_distance() {
    let a = PhasePoint::new(0.0, 0.0);
    let b = PhasePoint::new(3.0, 4.0);
    assert_eq!(a.distance(&b), 5.0);
    assert_eq!(b.distance(&a), 5.0);
}

#[test]
fn test_deserialized_curve_is_phase_sorted() {
    let yaml = "\
period: 1.0
epoch: 0.0
points:
  - { phase: 0.7, value: 1.0 }
  - { phase: 0.2, value: 0.9 }
  - { phase: 0.2, value: 0.8 }
";
    let curve: FoldedCurve = serde_yml::from_str(yaml).unwrap();
    let phases: Vec<f64> = curve.points().iter().map(|p| p.phase).collect();
    let values: Vec<f64> = curve.points().iter().map(|p| p.value).collect();

    assert_eq!(phases, vec![0.2, 0.2, 0.7]);
    assert_eq!(values, vec![0.9, 0.8, 1.0]);
}

#[test]
fn test_deserialized_curve_roundtrip() {
    let s = sampled(0.01, 3.0, |t| 1.0 - 0.01 * (t * 3.0).cos());
    let folded = fold(&s, 0.77, 0.1).unwrap();
    let yaml = serde_yml::to_string(&folded).unwrap();
    let parsed: FoldedCurve = serde_yml::from_str(&yaml).unwrap();
    assert_eq!(parsed, folded);
}

#[test]
fn test_deserialized_curve_rejects_bad_points() {
    let out_of_range = "period: 1.0\nepoch: 0.0\npoints:\n  - { phase: 1.5, value: 1.0 }\n";
    assert!(serde_yml::from_str::<FoldedCurve>(out_of_range).is_err());

    let negative = "period: 1.0\nepoch: 0.0\npoints:\n  - { phase: -0.1, value: 1.0 }\n";
    assert!(serde_yml::from_str::<FoldedCurve>(negative).is_err());

    let bad_period = "period: -1.0\nepoch: 0.0\npoints: []\n";
    assert!(serde_yml::from_str::<FoldedCurve>(bad_period).is_err());

    let raw = RawFoldedCurve {
        period: 1.0,
        epoch: 0.0,
        points: vec![PhasePoint::new(0.5, f64::NAN)],
    };
    let err = FoldedCurve::try_from(raw).unwrap_err();
    assert!(matches!(err, Error::InvalidPoint { period, .. } if period == 1.0));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
