use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use prim_conform::builtin;
use tracing::info;

pub(crate) fn run(path: &Path) -> anyhow::Result<ExitCode> {
    let suite = builtin::standard_suite();
    let mut text = suite.to_json_string()?;
    text.push('\n');
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), cases = suite.len(), "exported built-in suite");
    Ok(ExitCode::SUCCESS)
}
