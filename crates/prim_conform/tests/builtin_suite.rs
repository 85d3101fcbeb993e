use prim_conform::laws::{Samples, check_all, standard_laws};
use prim_conform::{ConformConfig, Runner, Status, builtin};
use prim_core::Registry;

#[test]
fn standard_suite_passes() {
    let registry = Registry::standard();
    let suite = builtin::standard_suite();
    let report = Runner::new(&registry, ConformConfig::default()).run(&suite);
    let failures: Vec<String> = report.failures().map(ToString::to_string).collect();
    assert!(failures.is_empty(), "{failures:#?}");
    assert_eq!(report.passed(), suite.len());
    assert_eq!(report.skipped(), 0);
}

#[test]
fn standard_laws_hold() {
    let results = check_all(&standard_laws(), &Samples::default(), 1e-4, None);
    assert!(!results.is_empty());
    for r in &results {
        assert!(r.violation.is_none(), "{}: {:?}", r.name, r.violation);
    }
}

#[test]
fn only_filter_narrows_to_one_namespace() {
    let registry = Registry::standard();
    let config = ConformConfig::default().with_only("^Logical\\.").unwrap();
    let report = Runner::new(&registry, config).run(&builtin::standard_suite());
    assert!(report.is_success());
    assert_eq!(report.passed(), 10);
    for outcome in &report.outcomes {
        if outcome.op.starts_with("Logical.") {
            assert_eq!(outcome.status, Status::Passed);
        } else {
            assert!(matches!(outcome.status, Status::Skipped(_)), "{outcome}");
        }
    }
}

#[test]
fn skip_by_case_name() {
    let registry = Registry::standard();
    let config = ConformConfig::default().with_skip(["modulo/".to_string()]);
    let report = Runner::new(&registry, config).run(&builtin::standard_suite());
    assert!(report.is_success());
    assert_eq!(report.skipped(), 8);
}

#[test]
fn broken_expectation_fails_with_reason() {
    let registry = Registry::standard();
    let mut suite = builtin::standard_suite();
    let case = suite
        .cases
        .iter_mut()
        .find(|c| c.name == "modulo/negative-dividend")
        .unwrap();
    // Floor semantics would give 2.
    case.expect = prim_conform::Expectation::Exact(2.0.into());
    let report = Runner::new(&registry, ConformConfig::default()).run(&suite);
    assert_eq!(report.failed(), 1);
    let failure = report.failures().next().unwrap();
    assert_eq!(failure.case, "modulo/negative-dividend");
    assert_eq!(failure.status, Status::Failed("expected 2.0 but got -1.0".into()));
}
