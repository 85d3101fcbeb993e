use std::fmt;

use prim_core::Value;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Positive,
    Negative,
}

/// What a case requires of the operation's result.
#[derive(Clone, Debug, PartialEq)]
pub enum Expectation {
    /// Exact equality. Numbers compare with IEEE `==`, so `0` matches `-0`.
    Exact(Value),
    /// `|actual - value| <= tolerance`; `None` uses the configured default.
    Approx { value: f64, tolerance: Option<f64> },
    Nan,
    Infinite { sign: Option<Sign> },
    NegativeZero,
}

impl Expectation {
    /// `Ok(())` when `actual` satisfies the expectation, otherwise the reason.
    pub fn check(&self, actual: &Value, default_tolerance: f64) -> Result<(), String> {
        match self {
            Expectation::Exact(expected) => {
                if values_match(expected, actual) {
                    Ok(())
                } else {
                    Err(format!("expected {expected} but got {actual}"))
                }
            }
            Expectation::Approx { value, tolerance } => {
                let tol = tolerance.unwrap_or(default_tolerance);
                let got = number(actual)?;
                if (got - value).abs() <= tol {
                    Ok(())
                } else {
                    Err(format!("expected {value} ± {tol} but got {actual}"))
                }
            }
            Expectation::Nan => {
                if number(actual)?.is_nan() {
                    Ok(())
                } else {
                    Err(format!("expected NaN but got {actual}"))
                }
            }
            Expectation::Infinite { sign } => {
                let got = number(actual)?;
                let sign_ok = match sign {
                    None => true,
                    Some(Sign::Positive) => got > 0.0,
                    Some(Sign::Negative) => got < 0.0,
                };
                if got.is_infinite() && sign_ok {
                    Ok(())
                } else {
                    Err(format!("expected {self} but got {actual}"))
                }
            }
            Expectation::NegativeZero => {
                let got = number(actual)?;
                if got == 0.0 && got.is_sign_negative() {
                    Ok(())
                } else {
                    Err(format!("expected -0 but got {actual}"))
                }
            }
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Exact(v) => write!(f, "{v}"),
            Expectation::Approx { value, tolerance: Some(t) } => write!(f, "{value} ± {t}"),
            Expectation::Approx { value, tolerance: None } => write!(f, "≈ {value}"),
            Expectation::Nan => f.write_str("NaN"),
            Expectation::Infinite { sign: None } => f.write_str("±Infinity"),
            Expectation::Infinite { sign: Some(Sign::Positive) } => f.write_str("Infinity"),
            Expectation::Infinite { sign: Some(Sign::Negative) } => f.write_str("-Infinity"),
            Expectation::NegativeZero => f.write_str("-0"),
        }
    }
}

fn number(actual: &Value) -> Result<f64, String> {
    actual
        .as_f64()
        .ok_or_else(|| format!("expected a Number but got {}", actual.type_name()))
}

fn values_match(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
        _ => expected == actual,
    }
}

/// One literal invocation and its required outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct Case {
    pub name: String,
    pub op: String,
    pub args: Vec<Value>,
    pub expect: Expectation,
}

impl Case {
    pub fn new(name: impl Into<String>, op: impl Into<String>, args: Vec<Value>) -> CaseBuilder {
        CaseBuilder {
            name: name.into(),
            op: op.into(),
            args,
        }
    }
}

pub struct CaseBuilder {
    name: String,
    op: String,
    args: Vec<Value>,
}

impl CaseBuilder {
    pub fn expect(self, expect: Expectation) -> Case {
        Case {
            name: self.name,
            op: self.op,
            args: self.args,
            expect,
        }
    }

    pub fn exact(self, value: impl Into<Value>) -> Case {
        self.expect(Expectation::Exact(value.into()))
    }

    pub fn approx(self, value: f64) -> Case {
        self.expect(Expectation::Approx {
            value,
            tolerance: None,
        })
    }

    pub fn nan(self) -> Case {
        self.expect(Expectation::Nan)
    }

    pub fn infinite(self, sign: Sign) -> Case {
        self.expect(Expectation::Infinite { sign: Some(sign) })
    }

    pub fn negative_zero(self) -> Case {
        self.expect(Expectation::NegativeZero)
    }
}
