use proptest::prelude::*;
use prim_core::comparison::{
    equal, greater_equal, greater_than, less_equal, less_than, not_equal,
};

/// Any non-NaN float, infinities and signed zeros included.
fn ordered_float() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>().prop_filter("non-NaN", |f| !f.is_nan()),
        Just(0.0),
        Just(-0.0),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        (-100i32..100).prop_map(f64::from),
    ]
}

proptest! {
    #[test]
    fn strict_orders_are_irreflexive(a in ordered_float()) {
        prop_assert!(!less_than(a, a));
        prop_assert!(!greater_than(a, a));
    }

    #[test]
    fn weak_orders_are_reflexive(a in ordered_float()) {
        prop_assert!(less_equal(a, a));
        prop_assert!(greater_equal(a, a));
        prop_assert!(equal(a, a));
    }

    #[test]
    fn greater_than_mirrors_less_than(a in ordered_float(), b in ordered_float()) {
        prop_assert_eq!(greater_than(a, b), less_than(b, a));
        prop_assert_eq!(greater_equal(a, b), less_equal(b, a));
    }

    #[test]
    fn less_equal_is_less_or_equal(a in ordered_float(), b in ordered_float()) {
        prop_assert_eq!(less_equal(a, b), less_than(a, b) || equal(a, b));
        prop_assert_eq!(greater_equal(a, b), greater_than(a, b) || equal(a, b));
    }

    #[test]
    fn weak_orders_are_antisymmetric(a in ordered_float(), b in ordered_float()) {
        if less_equal(a, b) && less_equal(b, a) {
            prop_assert!(equal(a, b));
        }
        if greater_equal(a, b) && greater_equal(b, a) {
            prop_assert!(equal(a, b));
        }
    }

    #[test]
    fn orders_are_transitive(a in ordered_float(), b in ordered_float(), c in ordered_float()) {
        if less_than(a, b) && less_than(b, c) {
            prop_assert!(less_than(a, c));
        }
        if greater_than(a, b) && greater_than(b, c) {
            prop_assert!(greater_than(a, c));
        }
        if less_equal(a, b) && less_equal(b, c) {
            prop_assert!(less_equal(a, c));
        }
        if equal(a, b) && equal(b, c) {
            prop_assert!(equal(a, c));
        }
    }

    #[test]
    fn equal_is_symmetric(a in ordered_float(), b in ordered_float()) {
        prop_assert_eq!(equal(a, b), equal(b, a));
    }

    #[test]
    fn not_equal_negates_equal_including_nan(a in any::<f64>(), b in any::<f64>()) {
        prop_assert_eq!(not_equal(a, b), !equal(a, b));
    }

    #[test]
    fn nan_is_unordered(a in any::<f64>()) {
        let nan = f64::NAN;
        prop_assert!(!equal(nan, a));
        prop_assert!(!less_than(nan, a) && !less_than(a, nan));
        prop_assert!(!greater_than(nan, a) && !greater_than(a, nan));
        prop_assert!(!less_equal(nan, a) && !less_equal(a, nan));
        prop_assert!(!greater_equal(nan, a) && !greater_equal(a, nan));
    }
}

#[test]
fn fixed_points() {
    assert!(!equal(f64::NAN, f64::NAN));
    assert!(not_equal(f64::NAN, f64::NAN));
    assert!(equal(-0.0, 0.0));
    assert!(equal(f64::INFINITY, f64::INFINITY));
}
