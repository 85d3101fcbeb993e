use std::fmt::Write;
use std::process::ExitCode;

use prim_core::{Operation, Registry};
use serde_json::json;

use super::emit;

fn describe(op: &Operation) -> serde_json::Value {
    json!({
        "name": op.qualified_name(),
        "namespace": op.namespace.name(),
        "params": op.signature.params.iter().map(|p| p.name()).collect::<Vec<_>>(),
        "returns": op.signature.ret.name(),
    })
}

pub(crate) fn run(json_out: bool) -> anyhow::Result<ExitCode> {
    let registry = Registry::standard();
    let text = if json_out {
        let ops: Vec<_> = registry.iter().map(describe).collect();
        format!("{}\n", serde_json::Value::Array(ops))
    } else {
        let width = registry.names().map(str::len).max().unwrap_or(0);
        let mut out = String::new();
        for op in registry.iter() {
            writeln!(out, "{:<width$}  {}", op.qualified_name(), op.signature)?;
        }
        out
    };
    emit(&text)?;
    Ok(ExitCode::SUCCESS)
}
