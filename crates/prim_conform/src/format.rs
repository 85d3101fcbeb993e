//! JSON interchange format for conformance suites.
//!
//! ```json
//! {
//!   "name": "arithmetic",
//!   "cases": [
//!     { "name": "add negatives", "op": "Arithmetic.add", "args": [-10, -20],
//!       "expect": { "kind": "exact", "value": -30 } },
//!     { "name": "divide by zero", "op": "Arithmetic.divide", "args": [5, 0],
//!       "expect": { "kind": "infinite", "sign": "positive" } }
//!   ]
//! }
//! ```
//!
//! Arguments and expected values are decoded against the operation's
//! signature, so `5` becomes a Number for `Arithmetic.divide` and an Integer
//! for `String.substring`. Special floats are spelled `"NaN"`, `"Infinity"`,
//! `"-Infinity"` and `"-0"`.

use prim_core::{Registry, Value, ValueType};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::config::check_tolerance;
use crate::errors::{ConformError, ConformResult};
use crate::{Case, Expectation, Sign, Suite};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpectSpec {
    Exact {
        value: Json,
    },
    Approx {
        value: Json,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tolerance: Option<f64>,
    },
    Nan,
    Infinite {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sign: Option<Sign>,
    },
    NegativeZero,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseSpec {
    pub name: String,
    pub op: String,
    #[serde(default)]
    pub args: Vec<Json>,
    pub expect: ExpectSpec,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuiteSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cases: Vec<CaseSpec>,
}

impl CaseSpec {
    pub fn encode(case: &Case) -> Self {
        let expect = match &case.expect {
            Expectation::Exact(v) => ExpectSpec::Exact { value: v.to_json() },
            Expectation::Approx { value, tolerance } => ExpectSpec::Approx {
                value: Value::Number(*value).to_json(),
                tolerance: *tolerance,
            },
            Expectation::Nan => ExpectSpec::Nan,
            Expectation::Infinite { sign } => ExpectSpec::Infinite { sign: *sign },
            Expectation::NegativeZero => ExpectSpec::NegativeZero,
        };
        Self {
            name: case.name.clone(),
            op: case.op.clone(),
            args: case.args.iter().map(Value::to_json).collect(),
            expect,
        }
    }

    /// Resolves the operation and decodes arguments and expectation against
    /// its signature. The case keeps the operation name as written.
    pub fn decode(&self, registry: &Registry) -> ConformResult<Case> {
        let invalid = |reason: String| ConformError::InvalidCase {
            case: self.name.clone(),
            reason,
        };
        let op = registry.resolve(&self.op)?;
        let sig = op.signature;
        if self.args.len() != sig.arity() {
            return Err(invalid(format!(
                "{} takes {} argument(s), case supplies {}",
                op.qualified_name(),
                sig.arity(),
                self.args.len()
            )));
        }
        let args = self
            .args
            .iter()
            .zip(sig.params)
            .map(|(json, &ty)| Value::from_json(json, ty))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| invalid(e.to_string()))?;

        let expect = match &self.expect {
            ExpectSpec::Exact { value } => Expectation::Exact(
                Value::from_json(value, sig.ret).map_err(|e| invalid(e.to_string()))?,
            ),
            ExpectSpec::Approx { value, tolerance } => {
                if sig.ret != ValueType::Number {
                    return Err(invalid(format!(
                        "approx expectation on {} which returns {}",
                        op.qualified_name(),
                        sig.ret
                    )));
                }
                let value = Value::from_json(value, ValueType::Number)
                    .ok()
                    .and_then(|v| v.as_f64())
                    .ok_or_else(|| invalid(format!("approx value {value} is not a number")))?;
                let tolerance = tolerance.map(check_tolerance).transpose().map_err(invalid)?;
                Expectation::Approx { value, tolerance }
            }
            ExpectSpec::Nan => Expectation::Nan,
            ExpectSpec::Infinite { sign } => Expectation::Infinite { sign: *sign },
            ExpectSpec::NegativeZero => Expectation::NegativeZero,
        };

        Ok(Case {
            name: self.name.clone(),
            op: self.op.clone(),
            args,
            expect,
        })
    }
}

impl SuiteSpec {
    pub fn encode(suite: &Suite) -> Self {
        Self {
            name: suite.name.clone(),
            description: suite.description.clone(),
            cases: suite.cases.iter().map(CaseSpec::encode).collect(),
        }
    }

    pub fn decode(&self, registry: &Registry) -> ConformResult<Suite> {
        let cases = self
            .cases
            .iter()
            .map(|c| c.decode(registry))
            .collect::<ConformResult<Vec<_>>>()?;
        Ok(Suite {
            name: self.name.clone(),
            description: self.description.clone(),
            cases,
        })
    }
}
