//! Comparison over IEEE 754 double precision.
//!
//! Equality treats `+0` and `-0` as equal and NaN as unequal to everything,
//! itself included. Every ordering comparison involving NaN is false, so the
//! ordering laws only hold on the non-NaN subset.

#[inline]
pub fn less_than(a: f64, b: f64) -> bool {
    a < b
}

#[inline]
pub fn greater_than(a: f64, b: f64) -> bool {
    a > b
}

#[inline]
pub fn equal(a: f64, b: f64) -> bool {
    a == b
}

/// Exactly `!equal(a, b)`, which makes `not_equal(NaN, NaN)` true.
#[inline]
pub fn not_equal(a: f64, b: f64) -> bool {
    !equal(a, b)
}

#[inline]
pub fn less_equal(a: f64, b: f64) -> bool {
    a <= b
}

#[inline]
pub fn greater_equal(a: f64, b: f64) -> bool {
    a >= b
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAN: f64 = f64::NAN;
    const INF: f64 = f64::INFINITY;

    #[test]
    fn ordering_on_finite_values() {
        assert!(less_than(1.0, 2.0));
        assert!(!less_than(2.0, 1.0));
        assert!(!less_than(2.0, 2.0));
        assert!(greater_than(-1.0, -2.0));
        assert!(less_equal(2.0, 2.0));
        assert!(greater_equal(2.0, 2.0));
        assert!(!greater_equal(1.0, 2.0));
    }

    #[test]
    fn nan_compares_false_except_not_equal() {
        for other in [NAN, 0.0, 1.0, INF, -INF] {
            assert!(!equal(NAN, other));
            assert!(not_equal(NAN, other));
            assert!(!less_than(NAN, other));
            assert!(!less_than(other, NAN));
            assert!(!greater_than(NAN, other));
            assert!(!less_equal(NAN, other));
            assert!(!greater_equal(other, NAN));
        }
    }

    #[test]
    fn signed_zero_and_infinities() {
        assert!(equal(-0.0, 0.0));
        assert!(!not_equal(0.0, -0.0));
        assert!(!less_than(-0.0, 0.0));
        assert!(equal(INF, INF));
        assert!(equal(-INF, -INF));
        assert!(!equal(INF, -INF));
        assert!(less_than(-INF, f64::MIN));
        assert!(greater_than(INF, f64::MAX));
    }
}
