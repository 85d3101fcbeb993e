use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use prim_core::arithmetic::{add, divide, modulo, multiply, subtract};

const TOLERANCE: f64 = 1e-4;

/// Small dyadic rationals: sums and products of these are exact in f64, so
/// associativity and distributivity can be asserted without rounding noise.
fn exact_float() -> impl Strategy<Value = f64> {
    (-4096i32..4096).prop_map(|n| n as f64 / 8.0)
}

fn moderate_float() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256, .. ProptestConfig::default()
    })]

    #[test]
    fn add_and_multiply_commute(a in moderate_float(), b in moderate_float()) {
        prop_assert_eq!(add(a, b), add(b, a));
        prop_assert_eq!(multiply(a, b), multiply(b, a));
    }

    #[test]
    fn add_and_multiply_associate(a in exact_float(), b in exact_float(), c in exact_float()) {
        prop_assert_eq!(add(add(a, b), c), add(a, add(b, c)));
        prop_assert_eq!(multiply(multiply(a, b), c), multiply(a, multiply(b, c)));
    }

    #[test]
    fn identities_and_annihilator(a in moderate_float()) {
        prop_assert_eq!(add(a, 0.0), a);
        prop_assert_eq!(multiply(a, 1.0), a);
        prop_assert_eq!(multiply(a, 0.0), 0.0);
        prop_assert_eq!(subtract(a, 0.0), a);
        prop_assert_eq!(divide(a, 1.0), a);
    }

    #[test]
    fn multiply_distributes_over_add(a in exact_float(), b in exact_float(), c in exact_float()) {
        prop_assert_eq!(multiply(a, add(b, c)), add(multiply(a, b), multiply(a, c)));
    }

    #[test]
    fn subtract_is_adding_the_negation(a in moderate_float(), b in moderate_float()) {
        prop_assert_eq!(subtract(a, b), add(a, -b));
    }

    #[test]
    fn divide_and_multiply_invert(a in moderate_float(), b in moderate_float()) {
        prop_assume!(b != 0.0);
        prop_assert!(close(multiply(divide(a, b), b), a), "a={a} b={b}");
    }

    #[test]
    fn divide_by_zero_by_sign(a in moderate_float()) {
        let q = divide(a, 0.0);
        if a > 0.0 {
            prop_assert_eq!(q, f64::INFINITY);
        } else if a < 0.0 {
            prop_assert_eq!(q, f64::NEG_INFINITY);
        } else {
            prop_assert!(q.is_nan());
        }
    }

    #[test]
    fn modulo_takes_dividend_sign(a in moderate_float(), b in moderate_float()) {
        prop_assume!(b != 0.0);
        let r = modulo(a, b);
        prop_assert!(r == 0.0 || r.is_sign_negative() == a.is_sign_negative(), "a={a} b={b} r={r}");
        prop_assert!(r.abs() < b.abs());
    }

    #[test]
    fn modulo_reconstructs_dividend(a in moderate_float(), b in moderate_float()) {
        prop_assume!(b != 0.0);
        let q = divide(a, b).trunc();
        prop_assert!(close(add(multiply(q, b), modulo(a, b)), a), "a={a} b={b}");
    }

    #[test]
    fn modulo_by_zero_is_nan(a in moderate_float()) {
        prop_assert!(modulo(a, 0.0).is_nan());
    }
}

#[test]
fn nan_propagates_through_every_operation() {
    for f in [add, subtract, multiply, divide, modulo] {
        assert!(f(f64::NAN, 2.0).is_nan());
        assert!(f(2.0, f64::NAN).is_nan());
    }
}
