//! Errors raised at the registry boundary.
//!
//! The operations themselves never fail; these only describe a harness asking
//! for something the registry cannot do.

use thiserror::Error;

use crate::ValueType;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("Unknown operation: {name}{}", did_you_mean(.suggestion))]
    UnknownOperation {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Argument count mismatch for {op}: expected {expected} but got {actual}")]
    ArgumentCountMismatch {
        op: String,
        expected: usize,
        actual: usize,
    },

    #[error("Type mismatch for argument {} of {op}: expected {expected} but got {actual}", .index + 1)]
    TypeMismatch {
        op: String,
        index: usize,
        expected: ValueType,
        actual: ValueType,
    },

    #[error("Invalid {ty} literal {text:?}: {reason}")]
    InvalidLiteral {
        ty: ValueType,
        text: String,
        reason: String,
    },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}
