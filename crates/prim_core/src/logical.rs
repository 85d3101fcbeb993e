//! Two-valued Boolean algebra.
//!
//! Operands are already-evaluated values, so there is no evaluation-order
//! contract and no observable short-circuiting.

#[inline]
pub fn and(a: bool, b: bool) -> bool {
    a && b
}

#[inline]
pub fn or(a: bool, b: bool) -> bool {
    a || b
}

#[inline]
pub fn not(a: bool) -> bool {
    !a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_tables() {
        assert!(!and(false, false));
        assert!(!and(false, true));
        assert!(!and(true, false));
        assert!(and(true, true));

        assert!(!or(false, false));
        assert!(or(false, true));
        assert!(or(true, false));
        assert!(or(true, true));

        assert!(not(false));
        assert!(!not(true));
    }
}
