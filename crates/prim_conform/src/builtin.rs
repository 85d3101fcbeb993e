//! The literal conformance matrix every port of the primitives must pass.

use prim_core::Value;

use crate::{Case, Sign, Suite};

pub const SUITE_NAME: &str = "standard";

fn n(x: f64) -> Value {
    Value::Number(x)
}

fn i(x: i64) -> Value {
    Value::Integer(x)
}

fn t(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn list(items: &[&str]) -> Value {
    Value::TextList(items.iter().map(|s| s.to_string()).collect())
}

/// Every operation, the worked scenarios, IEEE special values and
/// code-unit indexing on astral characters.
pub fn standard_suite() -> Suite {
    let mut suite = Suite::new(SUITE_NAME)
        .with_description("Literal results for every Arithmetic, Comparison, Logical and String operation");
    suite.extend(arithmetic());
    suite.extend(comparison());
    suite.extend(logical());
    suite.extend(string());
    suite
}

fn arithmetic() -> Vec<Case> {
    let inf = f64::INFINITY;
    let nan = f64::NAN;
    vec![
        Case::new("add/positive", "Arithmetic.add", vec![n(2.0), n(3.0)]).exact(5.0),
        Case::new("add/negative", "Arithmetic.add", vec![n(-10.0), n(-20.0)]).exact(-30.0),
        Case::new("add/decimal", "Arithmetic.add", vec![n(0.1), n(0.2)]).approx(0.3),
        Case::new("add/opposite-infinities", "Arithmetic.add", vec![n(inf), n(-inf)]).nan(),
        Case::new("add/infinity", "Arithmetic.add", vec![n(inf), n(1.0)]).infinite(Sign::Positive),
        Case::new("add/negative-zeros", "Arithmetic.add", vec![n(-0.0), n(-0.0)]).negative_zero(),
        Case::new("add/nan", "Arithmetic.add", vec![n(nan), n(1.0)]).nan(),
        Case::new("subtract/positive", "Arithmetic.subtract", vec![n(10.0), n(4.0)]).exact(6.0),
        Case::new("subtract/below-zero", "Arithmetic.subtract", vec![n(0.0), n(5.0)]).exact(-5.0),
        Case::new("subtract/infinities", "Arithmetic.subtract", vec![n(inf), n(inf)]).nan(),
        Case::new("subtract/negative-zero", "Arithmetic.subtract", vec![n(-0.0), n(0.0)])
            .negative_zero(),
        Case::new("multiply/positive", "Arithmetic.multiply", vec![n(3.0), n(4.0)]).exact(12.0),
        Case::new("multiply/mixed-sign", "Arithmetic.multiply", vec![n(-2.0), n(0.5)]).exact(-1.0),
        Case::new("multiply/negative-zero", "Arithmetic.multiply", vec![n(-1.0), n(0.0)])
            .negative_zero(),
        Case::new("multiply/infinity-by-zero", "Arithmetic.multiply", vec![n(inf), n(0.0)]).nan(),
        Case::new("multiply/overflow", "Arithmetic.multiply", vec![n(1e308), n(10.0)])
            .infinite(Sign::Positive),
        Case::new("divide/exact", "Arithmetic.divide", vec![n(10.0), n(4.0)]).exact(2.5),
        Case::new("divide/repeating", "Arithmetic.divide", vec![n(1.0), n(3.0)]).approx(0.33333),
        Case::new("divide/by-zero", "Arithmetic.divide", vec![n(5.0), n(0.0)])
            .infinite(Sign::Positive),
        Case::new("divide/negative-by-zero", "Arithmetic.divide", vec![n(-5.0), n(0.0)])
            .infinite(Sign::Negative),
        Case::new("divide/zero-by-zero", "Arithmetic.divide", vec![n(0.0), n(0.0)]).nan(),
        Case::new("divide/by-negative-infinity", "Arithmetic.divide", vec![n(1.0), n(-inf)])
            .negative_zero(),
        Case::new("modulo/positive", "Arithmetic.modulo", vec![n(10.0), n(3.0)]).exact(1.0),
        Case::new("modulo/negative-dividend", "Arithmetic.modulo", vec![n(-10.0), n(3.0)])
            .exact(-1.0),
        Case::new("modulo/negative-divisor", "Arithmetic.modulo", vec![n(10.0), n(-3.0)])
            .exact(1.0),
        Case::new("modulo/fractional", "Arithmetic.modulo", vec![n(5.5), n(2.0)]).exact(1.5),
        Case::new("modulo/by-zero", "Arithmetic.modulo", vec![n(5.0), n(0.0)]).nan(),
        Case::new("modulo/infinite-dividend", "Arithmetic.modulo", vec![n(inf), n(2.0)]).nan(),
        Case::new("modulo/infinite-divisor", "Arithmetic.modulo", vec![n(5.0), n(inf)]).exact(5.0),
        Case::new("modulo/negative-even", "Arithmetic.modulo", vec![n(-4.0), n(2.0)])
            .negative_zero(),
    ]
}

fn comparison() -> Vec<Case> {
    let inf = f64::INFINITY;
    let nan = f64::NAN;
    vec![
        Case::new("lessThan/true", "Comparison.lessThan", vec![n(1.0), n(2.0)]).exact(true),
        Case::new("lessThan/false", "Comparison.lessThan", vec![n(2.0), n(1.0)]).exact(false),
        Case::new("lessThan/equal", "Comparison.lessThan", vec![n(1.0), n(1.0)]).exact(false),
        Case::new("lessThan/nan", "Comparison.lessThan", vec![n(nan), n(1.0)]).exact(false),
        Case::new("greaterThan/true", "Comparison.greaterThan", vec![n(2.0), n(1.0)]).exact(true),
        Case::new("greaterThan/infinities", "Comparison.greaterThan", vec![n(-inf), n(inf)])
            .exact(false),
        Case::new("equal/same", "Comparison.equal", vec![n(1.0), n(1.0)]).exact(true),
        Case::new("equal/signed-zeros", "Comparison.equal", vec![n(-0.0), n(0.0)]).exact(true),
        Case::new("equal/nan", "Comparison.equal", vec![n(nan), n(nan)]).exact(false),
        Case::new("notEqual/nan", "Comparison.notEqual", vec![n(nan), n(nan)]).exact(true),
        Case::new("notEqual/different", "Comparison.notEqual", vec![n(1.0), n(2.0)]).exact(true),
        Case::new("notEqual/same", "Comparison.notEqual", vec![n(3.0), n(3.0)]).exact(false),
        Case::new("lessEqual/equal", "Comparison.lessEqual", vec![n(1.0), n(1.0)]).exact(true),
        Case::new("lessEqual/greater", "Comparison.lessEqual", vec![n(2.0), n(1.0)]).exact(false),
        Case::new("lessEqual/nan", "Comparison.lessEqual", vec![n(nan), n(nan)]).exact(false),
        Case::new("greaterEqual/infinity", "Comparison.greaterEqual", vec![n(inf), n(1e308)])
            .exact(true),
        Case::new("greaterEqual/equal", "Comparison.greaterEqual", vec![n(1.0), n(1.0)])
            .exact(true),
    ]
}

fn logical() -> Vec<Case> {
    let mut cases = Vec::with_capacity(10);
    for a in [false, true] {
        for b in [false, true] {
            cases.push(
                Case::new(format!("and/{a}-{b}"), "Logical.and", vec![a.into(), b.into()])
                    .exact(a && b),
            );
            cases.push(
                Case::new(format!("or/{a}-{b}"), "Logical.or", vec![a.into(), b.into()])
                    .exact(a || b),
            );
        }
        cases.push(Case::new(format!("not/{a}"), "Logical.not", vec![a.into()]).exact(!a));
    }
    cases
}

fn string() -> Vec<Case> {
    vec![
        Case::new("concat/words", "String.concat", vec![t("Hello, "), t("World")])
            .exact("Hello, World"),
        Case::new("concat/empty", "String.concat", vec![t(""), t("")]).exact(""),
        Case::new("concat/astral", "String.concat", vec![t("😀"), t("x")]).exact("😀x"),
        Case::new("length/ascii", "String.length", vec![t("Hello")]).exact(5i64),
        Case::new("length/empty", "String.length", vec![t("")]).exact(0i64),
        Case::new("length/astral", "String.length", vec![t("😀")]).exact(2i64),
        Case::new("length/accented", "String.length", vec![t("héllo")]).exact(5i64),
        Case::new("length/mixed", "String.length", vec![t("a😀b")]).exact(4i64),
        Case::new("substring/prefix", "String.substring", vec![t("Hello World"), i(0), i(4)])
            .exact("Hello"),
        Case::new("substring/reversed", "String.substring", vec![t("Test"), i(2), i(1)]).exact(""),
        Case::new("substring/single", "String.substring", vec![t("Test"), i(1), i(1)]).exact("e"),
        Case::new("substring/end-past-length", "String.substring", vec![t("Test"), i(2), i(10)])
            .exact("st"),
        Case::new("substring/negative-start", "String.substring", vec![t("Test"), i(-3), i(1)])
            .exact("Te"),
        Case::new("substring/before-astral", "String.substring", vec![t("a😀b"), i(0), i(0)])
            .exact("a"),
        Case::new("substring/whole-astral", "String.substring", vec![t("a😀b"), i(1), i(2)])
            .exact("😀"),
        Case::new("substring/half-astral", "String.substring", vec![t("a😀b"), i(1), i(1)])
            .exact("\u{FFFD}"),
        Case::new("indexOf/found", "String.indexOf", vec![t("Hello"), t("l")]).exact(2i64),
        Case::new("indexOf/missing", "String.indexOf", vec![t("Hello"), t("z")]).exact(-1i64),
        Case::new("indexOf/empty-needle", "String.indexOf", vec![t("Hello"), t("")]).exact(0i64),
        Case::new("indexOf/after-astral", "String.indexOf", vec![t("😀x"), t("x")]).exact(2i64),
        Case::new("contains/found", "String.contains", vec![t("Hello"), t("ell")]).exact(true),
        Case::new("contains/empty", "String.contains", vec![t("Hello"), t("")]).exact(true),
        Case::new("contains/case-sensitive", "String.contains", vec![t("Hello"), t("ELL")])
            .exact(false),
        Case::new("startsWith/true", "String.startsWith", vec![t("Hello"), t("He")]).exact(true),
        Case::new("startsWith/false", "String.startsWith", vec![t("Hello"), t("lo")]).exact(false),
        Case::new("endsWith/true", "String.endsWith", vec![t("Hello"), t("lo")]).exact(true),
        Case::new("endsWith/empty", "String.endsWith", vec![t(""), t("")]).exact(true),
        Case::new("toUppercase/accented", "String.toUppercase", vec![t("héllo wörld")])
            .exact("HÉLLO WÖRLD"),
        Case::new("toUppercase/digits", "String.toUppercase", vec![t("abc123")]).exact("ABC123"),
        Case::new("toLowercase/accented", "String.toLowercase", vec![t("ÀÉÎÕÜ")]).exact("àéîõü"),
        Case::new("toLowercase/mixed", "String.toLowercase", vec![t("MiXeD")]).exact("mixed"),
        Case::new("trim/whitespace", "String.trim", vec![t("  padded\t\n")]).exact("padded"),
        Case::new("trim/blank", "String.trim", vec![t("   ")]).exact(""),
        Case::new("trim/inner-space", "String.trim", vec![t("a b")]).exact("a b"),
        Case::new("split/empty-field", "String.split", vec![t("a,,b"), t(",")])
            .exact(list(&["a", "", "b"])),
        Case::new("split/no-delimiter", "String.split", vec![t("abc"), t(",")])
            .exact(list(&["abc"])),
        Case::new("split/trailing", "String.split", vec![t("a,b,"), t(",")])
            .exact(list(&["a", "b", ""])),
        Case::new("split/empty-delimiter", "String.split", vec![t("abc"), t("")])
            .exact(list(&["a", "b", "c"])),
        Case::new("split/empty-both", "String.split", vec![t(""), t("")]).exact(list(&[])),
        Case::new("split/empty-text", "String.split", vec![t(""), t(",")]).exact(list(&[""])),
        Case::new("split/multi-char", "String.split", vec![t("a::b"), t("::")])
            .exact(list(&["a", "b"])),
        Case::new("join/dash", "String.join", vec![list(&["a", "b", "c"]), t("-")]).exact("a-b-c"),
        Case::new("join/empty-list", "String.join", vec![list(&[]), t(",")]).exact(""),
        Case::new("join/single-empty", "String.join", vec![list(&[""]), t(",")]).exact(""),
        Case::new("join/trailing-empty", "String.join", vec![list(&["a", ""]), t(",")])
            .exact("a,"),
        Case::new("replace/empty-old", "String.replace", vec![t("Hello"), t(""), t("x")])
            .exact("Hello"),
        Case::new("replace/all", "String.replace", vec![t("Hello"), t("l"), t("L")])
            .exact("HeLLo"),
        Case::new("replace/growing", "String.replace", vec![t("aaa"), t("a"), t("bb")])
            .exact("bbbbbb"),
        Case::new("replace/missing", "String.replace", vec![t("abc"), t("z"), t("y")])
            .exact("abc"),
        Case::new("isEmpty/empty", "String.isEmpty", vec![t("")]).exact(true),
        Case::new("isEmpty/space", "String.isEmpty", vec![t(" ")]).exact(false),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use prim_core::Registry;

    use super::*;

    #[test]
    fn case_names_are_unique() {
        let suite = standard_suite();
        let mut seen = HashSet::new();
        for case in &suite.cases {
            assert!(seen.insert(case.name.as_str()), "duplicate {}", case.name);
        }
    }

    #[test]
    fn every_operation_is_exercised() {
        let registry = Registry::standard();
        let suite = standard_suite();
        for name in registry.names() {
            assert!(suite.cases.iter().any(|c| c.op == name), "{name} has no case");
        }
    }

    #[test]
    fn worked_scenarios_are_present() {
        let suite = standard_suite();
        for name in [
            "add/negative",
            "divide/by-zero",
            "modulo/negative-dividend",
            "split/empty-field",
            "substring/reversed",
            "replace/empty-old",
        ] {
            assert!(suite.cases.iter().any(|c| c.name == name), "{name}");
        }
    }
}
