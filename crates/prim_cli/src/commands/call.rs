use std::process::ExitCode;

use anyhow::Context;
use prim_core::{CallError, Registry, Value};
use tracing::debug;

pub(crate) fn run(name: &str, raw: &[String]) -> anyhow::Result<ExitCode> {
    let registry = Registry::standard();
    let op = registry.resolve(name)?;
    let params = op.signature.params;
    if raw.len() != params.len() {
        return Err(CallError::ArgumentCountMismatch {
            op: op.qualified_name().to_string(),
            expected: params.len(),
            actual: raw.len(),
        }
        .into());
    }
    let args = raw
        .iter()
        .zip(params)
        .enumerate()
        .map(|(i, (text, &ty))| {
            Value::parse_literal(text, ty).with_context(|| format!("argument {}", i + 1))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    debug!(op = op.qualified_name(), ?args, "calling");
    let result = op.invoke(&args)?;
    super::emit(&format!("{result}\n"))?;
    Ok(ExitCode::SUCCESS)
}
