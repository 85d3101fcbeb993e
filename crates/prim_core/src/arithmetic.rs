//! Arithmetic over IEEE 754 double precision.
//!
//! This module contains:
//! - add: Addition
//! - subtract: Subtraction
//! - multiply: Multiplication
//! - divide: Division
//! - modulo: Truncated remainder
//!
//! Results use the default round-to-nearest-even mode. NaN, the infinities
//! and signed zero propagate as IEEE 754 prescribes; nothing here errors.

#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// `a / b`. A zero divisor yields a signed infinity, or NaN for `0 / 0`.
#[inline]
pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

/// Remainder of truncated division: the result carries the sign of `a`.
///
/// `modulo(-10.0, 3.0)` is `-1.0`, not `2.0`. A zero divisor yields NaN.
#[inline]
pub fn modulo(a: f64, b: f64) -> f64 {
    a % b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_results() {
        assert_eq!(add(-10.0, -20.0), -30.0);
        assert_eq!(add(0.5, 0.25), 0.75);
        assert_eq!(subtract(10.0, 4.0), 6.0);
        assert_eq!(subtract(-3.0, -3.0), 0.0);
        assert_eq!(multiply(-4.0, 2.5), -10.0);
        assert_eq!(divide(9.0, 3.0), 3.0);
    }

    #[test]
    fn decimal_rounding_stays_within_tolerance() {
        assert!((subtract(0.3, 0.1) - 0.2).abs() < 1e-4);
        assert!((divide(1.0, 3.0) - 0.3333).abs() < 1e-4);
        assert!((add(0.1, 0.2) - 0.3).abs() < 1e-4);
    }

    #[test]
    fn division_by_zero_is_signed_infinity_or_nan() {
        assert_eq!(divide(5.0, 0.0), f64::INFINITY);
        assert_eq!(divide(-5.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(divide(5.0, -0.0), f64::NEG_INFINITY);
        assert!(divide(0.0, 0.0).is_nan());
    }

    #[test]
    fn modulo_follows_dividend_sign() {
        assert_eq!(modulo(10.0, 3.0), 1.0);
        assert_eq!(modulo(-10.0, 3.0), -1.0);
        assert_eq!(modulo(10.0, -3.0), 1.0);
        assert_eq!(modulo(-10.0, -3.0), -1.0);
        assert_eq!(modulo(5.5, 2.0), 1.5);
        assert!(modulo(7.0, 0.0).is_nan());
        assert!(modulo(f64::INFINITY, 2.0).is_nan());
        assert_eq!(modulo(2.0, f64::INFINITY), 2.0);
    }

    #[test]
    fn special_values_propagate() {
        assert!(add(f64::NAN, 1.0).is_nan());
        assert!(multiply(f64::NAN, 0.0).is_nan());
        assert!(add(f64::INFINITY, f64::NEG_INFINITY).is_nan());
        assert!(multiply(f64::INFINITY, 0.0).is_nan());
        assert_eq!(add(f64::INFINITY, 1e308), f64::INFINITY);
        assert_eq!(multiply(1e308, 10.0), f64::INFINITY);
        assert!(add(-0.0, -0.0).is_sign_negative());
        assert!(add(-0.0, 0.0).is_sign_positive());
    }
}
