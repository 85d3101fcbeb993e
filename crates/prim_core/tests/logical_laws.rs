use prim_core::logical::{and, not, or};

const BOOLS: [bool; 2] = [false, true];

#[test]
fn and_or_commute_associate_and_are_idempotent() {
    for a in BOOLS {
        assert_eq!(and(a, a), a);
        assert_eq!(or(a, a), a);
        for b in BOOLS {
            assert_eq!(and(a, b), and(b, a));
            assert_eq!(or(a, b), or(b, a));
            for c in BOOLS {
                assert_eq!(and(and(a, b), c), and(a, and(b, c)));
                assert_eq!(or(or(a, b), c), or(a, or(b, c)));
            }
        }
    }
}

#[test]
fn identities_and_annihilators() {
    for a in BOOLS {
        assert_eq!(and(a, true), a);
        assert_eq!(or(a, false), a);
        assert!(!and(a, false));
        assert!(or(a, true));
    }
}

#[test]
fn negation_laws() {
    for a in BOOLS {
        assert_eq!(not(not(a)), a);
        assert!(or(a, not(a)), "excluded middle");
        assert!(!and(a, not(a)), "non-contradiction");
        for b in BOOLS {
            assert_eq!(not(and(a, b)), or(not(a), not(b)));
            assert_eq!(not(or(a, b)), and(not(a), not(b)));
        }
    }
}
