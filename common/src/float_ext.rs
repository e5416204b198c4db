pub trait FloatExt: Copy {
    /// Absolute comparison against [`crate::EPSILON`].
    fn approximately_eq(self, other: Self) -> bool;

    /// Absolute comparison against a caller-chosen tolerance.
    fn approx_eq_eps(self, other: Self, eps: Self) -> bool;

    /// Distance from `self` to the nearest multiple of `period`.
    ///
    /// Useful when comparing phases, where `0` and `period` denote the same point.
    fn circular_distance(self, other: Self, period: Self) -> Self;
}

impl FloatExt for f64 {
    fn approximately_eq(self, other: Self) -> bool {
        self.approx_eq_eps(other, crate::EPSILON)
    }

    fn approx_eq_eps(self, other: Self, eps: Self) -> bool {
        (self - other).abs() < eps
    }

    fn circular_distance(self, other: Self, period: Self) -> Self {
        let d = (self - other).rem_euclid(period);
        d.min(period - d)
    }
}

impl FloatExt for f32 {
    fn approximately_eq(self, other: Self) -> bool {
        self.approx_eq_eps(other, crate::EPSILON as f32)
    }

    fn approx_eq_eps(self, other: Self, eps: Self) -> bool {
        (self - other).abs() < eps
    }

    fn circular_distance(self, other: Self, period: Self) -> Self {
        let d = (self - other).rem_euclid(period);
        d.min(period - d)
    }
}
