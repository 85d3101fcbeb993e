//! Dynamic values crossing the registry boundary.
//!
//! The operation modules work on native Rust types; [`Value`] is only used
//! where a harness supplies arguments as literals (command line, JSON suite
//! files) and needs results back in a uniform shape.

use std::fmt;

use serde_json::Value as Json;

use crate::{Appendable, CallError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Number,
    Integer,
    Boolean,
    Text,
    TextList,
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Number => "Number",
            ValueType::Integer => "Integer",
            ValueType::Boolean => "Boolean",
            ValueType::Text => "Text",
            ValueType::TextList => "Array<Text>",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Integer(i64),
    Boolean(bool),
    Text(String),
    TextList(Vec<String>),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Number(_) => ValueType::Number,
            Value::Integer(_) => ValueType::Integer,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Text(_) => ValueType::Text,
            Value::TextList(_) => ValueType::TextList,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.value_type().name()
    }

    /// Numeric view; integers widen to `f64` only when exactly representable.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(f) => Some(*f),
            Value::Integer(i) => widen_integer(*i),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Parses a command-line literal as a value of type `ty`.
    ///
    /// Numbers accept Rust float syntax plus `Infinity`/`-Infinity`/`NaN`
    /// (case-insensitive). Text is taken verbatim. Text lists are a JSON array
    /// of strings.
    pub fn parse_literal(text: &str, ty: ValueType) -> Result<Value, CallError> {
        let invalid = |reason: String| CallError::InvalidLiteral {
            ty,
            text: text.to_string(),
            reason,
        };
        match ty {
            ValueType::Number => parse_number(text)
                .map(Value::Number)
                .ok_or_else(|| invalid("not a number".into())),
            ValueType::Integer => text
                .trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|e| invalid(e.to_string())),
            ValueType::Boolean => match text.trim() {
                "true" => Ok(Value::Boolean(true)),
                "false" => Ok(Value::Boolean(false)),
                _ => Err(invalid("expected true or false".into())),
            },
            ValueType::Text => Ok(Value::Text(text.to_string())),
            ValueType::TextList => {
                let items: Vec<String> =
                    serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?;
                Ok(Value::TextList(items))
            }
        }
    }

    /// Decodes a JSON value as type `ty`.
    ///
    /// Special floats are spelled as the strings `"NaN"`, `"Infinity"`,
    /// `"-Infinity"` and `"-0"` because JSON numbers cannot carry them.
    pub fn from_json(json: &Json, ty: ValueType) -> Result<Value, CallError> {
        let invalid = |reason: &str| CallError::InvalidLiteral {
            ty,
            text: json.to_string(),
            reason: reason.to_string(),
        };
        match (ty, json) {
            (ValueType::Number, Json::Number(n)) => n
                .as_f64()
                .map(Value::Number)
                .ok_or_else(|| invalid("number out of range")),
            (ValueType::Number, Json::String(s)) => parse_number(s)
                .map(Value::Number)
                .ok_or_else(|| invalid("not a number")),
            (ValueType::Integer, Json::Number(n)) => n
                .as_i64()
                .map(Value::Integer)
                .ok_or_else(|| invalid("not an integer")),
            (ValueType::Boolean, Json::Bool(b)) => Ok(Value::Boolean(*b)),
            (ValueType::Text, Json::String(s)) => Ok(Value::Text(s.clone())),
            (ValueType::TextList, Json::Array(items)) => items
                .iter()
                .map(|it| it.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(Value::TextList)
                .ok_or_else(|| invalid("array items must be strings")),
            _ => Err(invalid("wrong JSON type")),
        }
    }

    pub fn to_json(&self) -> Json {
        match self {
            Value::Number(f) => number_to_json(*f),
            Value::Integer(i) => Json::from(*i),
            Value::Boolean(b) => Json::Bool(*b),
            Value::Text(s) => Json::String(s.clone()),
            Value::TextList(items) => {
                Json::Array(items.iter().map(|s| Json::String(s.clone())).collect())
            }
        }
    }
}

/// `i` as `f64`, or `None` when the conversion would round.
pub(crate) fn widen_integer(i: i64) -> Option<f64> {
    // 2^63 is the first float past i64::MAX; `as i64` saturates there.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let f = i as f64;
    (f < LIMIT && f as i64 == i).then_some(f)
}

fn parse_number(text: &str) -> Option<f64> {
    let t = text.trim();
    // `f64::from_str` already takes inf/infinity/nan in any case.
    t.parse::<f64>().ok()
}

fn number_to_json(f: f64) -> Json {
    if f.is_nan() {
        Json::String("NaN".into())
    } else if f.is_infinite() {
        Json::String(if f > 0.0 { "Infinity" } else { "-Infinity" }.into())
    } else if f == 0.0 && f.is_sign_negative() {
        Json::String("-0".into())
    } else {
        serde_json::Number::from_f64(f)
            .map(Json::Number)
            .unwrap_or(Json::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        out.append_value(self);
        f.write_str(&out)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(f)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::TextList(items)
    }
}
