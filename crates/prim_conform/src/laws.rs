//! Algebraic laws checked over fixed sample grids.
//!
//! Float samples are small dyadic rationals so sums and products are exact;
//! laws that involve division still compare within the configured tolerance.
//! Ordering laws run on the non-NaN grid only, and NaN behavior is pinned by
//! laws of its own.

use prim_core::arithmetic::{add, divide, modulo, multiply, subtract};
use prim_core::comparison::{
    equal, greater_equal, greater_than, less_equal, less_than, not_equal,
};
use prim_core::logical::{and, not, or};
use prim_core::string::{
    concat, contains, ends_with, is_empty, join, length, split, starts_with, to_lowercase,
    to_uppercase, trim,
};
use prim_core::Namespace;
use regex::Regex;
use serde_json::json;
use tracing::debug;

pub struct Samples {
    pub numbers: Vec<f64>,
    pub booleans: [bool; 2],
    pub texts: Vec<String>,
    pub delimiters: Vec<String>,
}

impl Default for Samples {
    fn default() -> Self {
        Self {
            numbers: vec![
                -1024.0, -10.0, -2.5, -1.0, -0.0, 0.0, 0.5, 1.0, 3.0, 7.25, 1024.0,
            ],
            booleans: [false, true],
            texts: [
                "",
                "a",
                "Hello",
                "a,,b",
                "  padded\t\n",
                "héllo wörld",
                "ÀÉÎÕÜ",
                "😀 x 😀",
                "你好,世界",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            delimiters: [",", "l", " ", "😀", "::"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

type Check = fn(&Samples, f64) -> Result<(), String>;

pub struct Law {
    pub name: &'static str,
    pub namespace: Namespace,
    check: Check,
}

impl Law {
    const fn new(name: &'static str, namespace: Namespace, check: Check) -> Self {
        Self {
            name,
            namespace,
            check,
        }
    }

    pub fn check(&self, samples: &Samples, tolerance: f64) -> Result<(), String> {
        (self.check)(samples, tolerance)
    }
}

#[derive(Clone, Debug)]
pub struct LawResult {
    pub name: &'static str,
    pub namespace: Namespace,
    /// Counterexample, if the law does not hold.
    pub violation: Option<String>,
}

impl LawResult {
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "law": self.name,
            "namespace": self.namespace.name(),
            "holds": self.violation.is_none(),
            "violation": self.violation,
        })
    }
}

/// Runs every law (or those whose name matches `only`).
pub fn check_all(
    laws: &[Law],
    samples: &Samples,
    tolerance: f64,
    only: Option<&Regex>,
) -> Vec<LawResult> {
    laws.iter()
        .filter(|law| only.is_none_or(|re| re.is_match(law.name)))
        .map(|law| {
            let violation = law.check(samples, tolerance).err();
            debug!(law = law.name, holds = violation.is_none(), "law checked");
            LawResult {
                name: law.name,
                namespace: law.namespace,
                violation,
            }
        })
        .collect()
}

fn ensure(ok: bool, msg: impl FnOnce() -> String) -> Result<(), String> {
    if ok { Ok(()) } else { Err(msg()) }
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

fn pairs<T: Copy>(xs: &[T]) -> impl Iterator<Item = (T, T)> + '_ {
    xs.iter().flat_map(move |&a| xs.iter().map(move |&b| (a, b)))
}

fn triples<T: Copy>(xs: &[T]) -> impl Iterator<Item = (T, T, T)> + '_ {
    pairs(xs).flat_map(move |(a, b)| xs.iter().map(move |&c| (a, b, c)))
}

/// Every law, grouped by namespace.
pub fn standard_laws() -> Vec<Law> {
    use Namespace::{Arithmetic, Comparison, Logical, String as Text};

    vec![
        // Arithmetic
        Law::new("add is commutative", Arithmetic, |s, _| {
            for (a, b) in pairs(&s.numbers) {
                ensure(add(a, b) == add(b, a), || format!("add({a}, {b})"))?;
            }
            Ok(())
        }),
        Law::new("add is associative", Arithmetic, |s, tol| {
            for (a, b, c) in triples(&s.numbers) {
                ensure(close(add(add(a, b), c), add(a, add(b, c)), tol), || {
                    format!("a={a} b={b} c={c}")
                })?;
            }
            Ok(())
        }),
        Law::new("multiply is commutative", Arithmetic, |s, _| {
            for (a, b) in pairs(&s.numbers) {
                ensure(multiply(a, b) == multiply(b, a), || format!("multiply({a}, {b})"))?;
            }
            Ok(())
        }),
        Law::new("multiply is associative", Arithmetic, |s, tol| {
            for (a, b, c) in triples(&s.numbers) {
                let l = multiply(multiply(a, b), c);
                let r = multiply(a, multiply(b, c));
                ensure(close(l, r, tol), || format!("a={a} b={b} c={c}"))?;
            }
            Ok(())
        }),
        Law::new("zero is the additive identity", Arithmetic, |s, _| {
            for &a in &s.numbers {
                ensure(add(a, 0.0) == a && add(0.0, a) == a, || format!("a={a}"))?;
            }
            Ok(())
        }),
        Law::new("one is the multiplicative identity", Arithmetic, |s, _| {
            for &a in &s.numbers {
                ensure(multiply(a, 1.0) == a && multiply(1.0, a) == a, || format!("a={a}"))?;
            }
            Ok(())
        }),
        Law::new("zero annihilates multiply", Arithmetic, |s, _| {
            for &a in &s.numbers {
                ensure(multiply(a, 0.0) == 0.0, || format!("a={a}"))?;
            }
            Ok(())
        }),
        Law::new("multiply distributes over add", Arithmetic, |s, tol| {
            for (a, b, c) in triples(&s.numbers) {
                let l = multiply(a, add(b, c));
                let r = add(multiply(a, b), multiply(a, c));
                ensure(close(l, r, tol), || format!("a={a} b={b} c={c}"))?;
            }
            Ok(())
        }),
        Law::new("subtract adds the negation", Arithmetic, |s, _| {
            for (a, b) in pairs(&s.numbers) {
                ensure(subtract(a, b) == add(a, -b), || format!("a={a} b={b}"))?;
                ensure(subtract(a, 0.0) == a, || format!("a={a}"))?;
            }
            Ok(())
        }),
        Law::new("divide inverts multiply", Arithmetic, |s, tol| {
            for (a, b) in pairs(&s.numbers) {
                ensure(divide(a, 1.0) == a, || format!("divide({a}, 1)"))?;
                if b != 0.0 {
                    ensure(close(multiply(divide(a, b), b), a, tol), || format!("a={a} b={b}"))?;
                }
            }
            Ok(())
        }),
        Law::new("divide by zero follows the dividend sign", Arithmetic, |s, _| {
            for &a in &s.numbers {
                let q = divide(a, 0.0);
                let ok = if a > 0.0 {
                    q == f64::INFINITY
                } else if a < 0.0 {
                    q == f64::NEG_INFINITY
                } else {
                    q.is_nan()
                };
                ensure(ok, || format!("divide({a}, 0) = {q}"))?;
            }
            Ok(())
        }),
        Law::new("modulo takes the dividend sign", Arithmetic, |s, _| {
            for (a, b) in pairs(&s.numbers) {
                let r = modulo(a, b);
                if b == 0.0 {
                    ensure(r.is_nan(), || format!("modulo({a}, 0) = {r}"))?;
                } else {
                    ensure(r == 0.0 || r.is_sign_negative() == a.is_sign_negative(), || {
                        format!("modulo({a}, {b}) = {r}")
                    })?;
                }
            }
            Ok(())
        }),
        Law::new("modulo reconstructs the dividend", Arithmetic, |s, tol| {
            for (a, b) in pairs(&s.numbers) {
                if b == 0.0 {
                    continue;
                }
                let q = divide(a, b).trunc();
                ensure(close(add(multiply(q, b), modulo(a, b)), a, tol), || {
                    format!("a={a} b={b}")
                })?;
            }
            Ok(())
        }),
        // Comparison
        Law::new("strict orders are irreflexive", Comparison, |s, _| {
            for &a in &s.numbers {
                ensure(!less_than(a, a) && !greater_than(a, a), || format!("a={a}"))?;
            }
            Ok(())
        }),
        Law::new("strict orders are transitive", Comparison, |s, _| {
            for (a, b, c) in triples(&s.numbers) {
                if less_than(a, b) && less_than(b, c) {
                    ensure(less_than(a, c), || format!("{a} < {b} < {c}"))?;
                }
                if greater_than(a, b) && greater_than(b, c) {
                    ensure(greater_than(a, c), || format!("{a} > {b} > {c}"))?;
                }
            }
            Ok(())
        }),
        Law::new("weak orders are reflexive", Comparison, |s, _| {
            for &a in &s.numbers {
                ensure(less_equal(a, a) && greater_equal(a, a), || format!("a={a}"))?;
            }
            Ok(())
        }),
        Law::new("weak orders are antisymmetric", Comparison, |s, _| {
            for (a, b) in pairs(&s.numbers) {
                if less_equal(a, b) && less_equal(b, a) {
                    ensure(equal(a, b), || format!("a={a} b={b}"))?;
                }
                if greater_equal(a, b) && greater_equal(b, a) {
                    ensure(equal(a, b), || format!("a={a} b={b}"))?;
                }
            }
            Ok(())
        }),
        Law::new("weak orders are transitive", Comparison, |s, _| {
            for (a, b, c) in triples(&s.numbers) {
                if less_equal(a, b) && less_equal(b, c) {
                    ensure(less_equal(a, c), || format!("{a} <= {b} <= {c}"))?;
                }
                if greater_equal(a, b) && greater_equal(b, c) {
                    ensure(greater_equal(a, c), || format!("{a} >= {b} >= {c}"))?;
                }
            }
            Ok(())
        }),
        Law::new("equal is an equivalence", Comparison, |s, _| {
            for (a, b, c) in triples(&s.numbers) {
                ensure(equal(a, a), || format!("equal({a}, {a})"))?;
                ensure(equal(a, b) == equal(b, a), || format!("a={a} b={b}"))?;
                if equal(a, b) && equal(b, c) {
                    ensure(equal(a, c), || format!("a={a} b={b} c={c}"))?;
                }
            }
            Ok(())
        }),
        Law::new("greater than mirrors less than", Comparison, |s, _| {
            for (a, b) in pairs(&s.numbers) {
                ensure(greater_than(a, b) == less_than(b, a), || format!("a={a} b={b}"))?;
            }
            Ok(())
        }),
        Law::new("less equal is less or equal", Comparison, |s, _| {
            for (a, b) in pairs(&s.numbers) {
                ensure(less_equal(a, b) == (less_than(a, b) || equal(a, b)), || {
                    format!("a={a} b={b}")
                })?;
            }
            Ok(())
        }),
        Law::new("not equal negates equal", Comparison, |s, _| {
            let with_nan = s.numbers.iter().copied().chain([f64::NAN]).collect::<Vec<_>>();
            for (a, b) in pairs(&with_nan) {
                ensure(not_equal(a, b) == !equal(a, b), || format!("a={a} b={b}"))?;
            }
            Ok(())
        }),
        Law::new("NaN is unordered and unequal", Comparison, |s, _| {
            let nan = f64::NAN;
            for a in s.numbers.iter().copied().chain([nan]) {
                let any_true = equal(nan, a)
                    || less_than(nan, a)
                    || less_than(a, nan)
                    || greater_than(nan, a)
                    || greater_than(a, nan)
                    || less_equal(nan, a)
                    || less_equal(a, nan)
                    || greater_equal(nan, a)
                    || greater_equal(a, nan);
                ensure(!any_true, || format!("NaN compared true against {a}"))?;
            }
            ensure(equal(-0.0, 0.0), || "equal(-0, 0) is false".into())
        }),
        // Logical
        Law::new("and/or are commutative", Logical, |s, _| {
            for (a, b) in pairs(&s.booleans) {
                ensure(and(a, b) == and(b, a) && or(a, b) == or(b, a), || {
                    format!("a={a} b={b}")
                })?;
            }
            Ok(())
        }),
        Law::new("and/or are associative", Logical, |s, _| {
            for (a, b, c) in triples(&s.booleans) {
                ensure(and(and(a, b), c) == and(a, and(b, c)), || format!("and {a} {b} {c}"))?;
                ensure(or(or(a, b), c) == or(a, or(b, c)), || format!("or {a} {b} {c}"))?;
            }
            Ok(())
        }),
        Law::new("and/or are idempotent", Logical, |s, _| {
            for &a in &s.booleans {
                ensure(and(a, a) == a && or(a, a) == a, || format!("a={a}"))?;
            }
            Ok(())
        }),
        Law::new("identities and annihilators", Logical, |s, _| {
            for &a in &s.booleans {
                ensure(and(a, true) == a, || format!("and({a}, true)"))?;
                ensure(or(a, false) == a, || format!("or({a}, false)"))?;
                ensure(!and(a, false), || format!("and({a}, false)"))?;
                ensure(or(a, true), || format!("or({a}, true)"))?;
            }
            Ok(())
        }),
        Law::new("double negation", Logical, |s, _| {
            for &a in &s.booleans {
                ensure(not(not(a)) == a, || format!("a={a}"))?;
            }
            Ok(())
        }),
        Law::new("excluded middle and non-contradiction", Logical, |s, _| {
            for &a in &s.booleans {
                ensure(or(a, not(a)), || format!("excluded middle fails for {a}"))?;
                ensure(!and(a, not(a)), || format!("contradiction holds for {a}"))?;
            }
            Ok(())
        }),
        Law::new("De Morgan", Logical, |s, _| {
            for (a, b) in pairs(&s.booleans) {
                ensure(not(and(a, b)) == or(not(a), not(b)), || format!("not-and {a} {b}"))?;
                ensure(not(or(a, b)) == and(not(a), not(b)), || format!("not-or {a} {b}"))?;
            }
            Ok(())
        }),
        // String
        Law::new("length is additive over concat", Text, |s, _| {
            for a in &s.texts {
                for b in &s.texts {
                    ensure(length(&concat(a, b)) == length(a) + length(b), || {
                        format!("a={a:?} b={b:?}")
                    })?;
                }
            }
            Ok(())
        }),
        Law::new("concat is associative with empty identity", Text, |s, _| {
            for a in &s.texts {
                ensure(concat(a, "") == *a && concat("", a) == *a, || format!("a={a:?}"))?;
                for b in &s.texts {
                    for c in &s.texts {
                        ensure(concat(&concat(a, b), c) == concat(a, &concat(b, c)), || {
                            format!("a={a:?} b={b:?} c={c:?}")
                        })?;
                    }
                }
            }
            Ok(())
        }),
        Law::new("join undoes split", Text, |s, _| {
            for text in &s.texts {
                for d in &s.delimiters {
                    ensure(join(&split(text, d), d) == *text, || {
                        format!("s={text:?} d={d:?}")
                    })?;
                }
            }
            Ok(())
        }),
        Law::new("case mapping and trim are idempotent", Text, |s, _| {
            for text in &s.texts {
                let up = to_uppercase(text);
                let low = to_lowercase(text);
                let t = trim(text);
                ensure(to_uppercase(&up) == up, || format!("toUppercase {text:?}"))?;
                ensure(to_lowercase(&low) == low, || format!("toLowercase {text:?}"))?;
                ensure(trim(&t) == t, || format!("trim {text:?}"))?;
            }
            Ok(())
        }),
        Law::new("empty and self needles always match", Text, |s, _| {
            for text in &s.texts {
                let ok = contains(text, "")
                    && contains(text, text)
                    && starts_with(text, "")
                    && starts_with(text, text)
                    && ends_with(text, "")
                    && ends_with(text, text);
                ensure(ok, || format!("s={text:?}"))?;
            }
            Ok(())
        }),
        Law::new("isEmpty is zero length", Text, |s, _| {
            for text in &s.texts {
                ensure(is_empty(text) == (length(text) == 0), || format!("s={text:?}"))?;
            }
            Ok(())
        }),
    ]
}
