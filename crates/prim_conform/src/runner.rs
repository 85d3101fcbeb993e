use std::fmt;

use prim_core::Registry;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::{Case, ConformConfig, Suite};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Passed,
    Failed(String),
    Skipped(String),
}

#[derive(Clone, Debug)]
pub struct Outcome {
    pub suite: String,
    pub case: String,
    pub op: String,
    pub status: Status,
}

impl Outcome {
    pub fn to_json(&self) -> serde_json::Value {
        let (status, detail) = match &self.status {
            Status::Passed => ("pass", None),
            Status::Failed(reason) => ("fail", Some(reason.as_str())),
            Status::Skipped(reason) => ("skip", Some(reason.as_str())),
        };
        json!({
            "suite": self.suite,
            "case": self.case,
            "op": self.op,
            "status": status,
            "detail": detail,
        })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            Status::Passed => write!(f, "PASS {}/{}", self.suite, self.case),
            Status::Failed(reason) => {
                write!(f, "FAIL {}/{} [{}]: {}", self.suite, self.case, self.op, reason)
            }
            Status::Skipped(reason) => write!(f, "SKIP {}/{}: {}", self.suite, self.case, reason),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, Status::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, Status::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, Status::Skipped(_)))
    }

    fn count(&self, pred: impl Fn(&Status) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, Status::Failed(_)))
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped",
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }

    /// One JSON object per outcome, newline separated.
    pub fn to_json_lines(&self) -> String {
        let mut out = String::new();
        for o in &self.outcomes {
            out.push_str(&o.to_json().to_string());
            out.push('\n');
        }
        out
    }
}

pub struct Runner<'r> {
    registry: &'r Registry,
    config: ConformConfig,
}

impl<'r> Runner<'r> {
    pub fn new(registry: &'r Registry, config: ConformConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ConformConfig {
        &self.config
    }

    pub fn run(&self, suite: &Suite) -> Report {
        self.run_all(std::slice::from_ref(suite))
    }

    pub fn run_all(&self, suites: &[Suite]) -> Report {
        let mut report = Report::default();
        'suites: for suite in suites {
            let before = report.outcomes.len();
            for case in &suite.cases {
                let outcome = self.run_case(&suite.name, case);
                let failed = matches!(outcome.status, Status::Failed(_));
                report.outcomes.push(outcome);
                if failed && self.config.fail_fast {
                    warn!(suite = %suite.name, case = %case.name, "stopping at first failure");
                    break 'suites;
                }
            }
            let ran = &report.outcomes[before..];
            info!(
                suite = %suite.name,
                cases = ran.len(),
                failed = ran.iter().filter(|o| matches!(o.status, Status::Failed(_))).count(),
                "suite finished"
            );
        }
        report
    }

    fn run_case(&self, suite: &str, case: &Case) -> Outcome {
        let status = self.evaluate(case);
        match &status {
            Status::Passed => debug!(suite, case = %case.name, "pass"),
            Status::Failed(reason) => debug!(suite, case = %case.name, %reason, "fail"),
            Status::Skipped(reason) => debug!(suite, case = %case.name, %reason, "skip"),
        }
        Outcome {
            suite: suite.to_string(),
            case: case.name.clone(),
            op: case.op.clone(),
            status,
        }
    }

    fn evaluate(&self, case: &Case) -> Status {
        if !self.config.selects(&case.name, &case.op) {
            return Status::Skipped("filtered out".into());
        }
        if let Some(s) = self.config.skips(&case.name) {
            return Status::Skipped(format!("matches skip '{s}'"));
        }
        let actual = match self.registry.call(&case.op, &case.args) {
            Ok(v) => v,
            Err(e) => return Status::Failed(e.to_string()),
        };
        match case.expect.check(&actual, self.config.tolerance) {
            Ok(()) => Status::Passed,
            Err(reason) => Status::Failed(reason),
        }
    }
}
